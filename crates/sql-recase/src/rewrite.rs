//! Statement scanner and keyword rewriter.
//!
//! Locates delimiter-anchored double-quoted regions in raw file text and
//! rewrites the case of SQL keywords found inside them. The scan is purely
//! lexical: a region is split on the space character and each token is
//! compared, after ASCII upper-casing, against the keyword vocabulary.
//! Punctuation-adjacent tokens (`SELECT,`) fail the exact-match lookup and
//! are left alone; that is documented behavior, not an oversight.
//!
//! The scan records same-length edits and applies them after the pass, so
//! the output buffer always has exactly the input's byte length and no edit
//! can invalidate the offset of another.

use crate::keywords;

/// Target case for matched keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Rewrite matched keywords to uppercase.
    Upper,
    /// Rewrite matched keywords to lowercase.
    Lower,
}

/// A quoted region whose closing quote was never found.
#[derive(Debug, Clone)]
pub struct UnterminatedRegion {
    /// Byte offset of the delimiter occurrence that anchored the region.
    pub offset: usize,
    /// Lossy excerpt of the text around the offset, for diagnostics.
    pub context: String,
}

/// Result of rewriting one buffer.
#[derive(Debug)]
pub struct RewriteOutcome {
    /// The rewritten text. Always the same length as the input.
    pub text: Vec<u8>,
    /// Number of keyword tokens matched (and therefore case-folded).
    pub keywords_matched: usize,
    /// Number of complete statement regions scanned.
    pub regions: usize,
    /// Regions skipped because no unescaped closing quote was found.
    pub unterminated: Vec<UnterminatedRegion>,
}

/// A same-length case-folding edit produced by the scan.
struct Edit {
    offset: usize,
    replacement: Vec<u8>,
}

/// Scanner/rewriter for delimiter-anchored quoted SQL statements.
pub struct StatementRewriter {
    delimiter: Vec<u8>,
    mode: CaseMode,
}

impl StatementRewriter {
    /// Create a rewriter.
    ///
    /// A `None` delimiter defaults to a single `"`, which makes every
    /// double-quoted string in the input a candidate statement region.
    pub fn new(delimiter: Option<&str>, mode: CaseMode) -> Self {
        Self {
            delimiter: delimiter.unwrap_or("\"").as_bytes().to_vec(),
            mode,
        }
    }

    /// Rewrite keyword casing in `text`, returning the new buffer.
    ///
    /// For each delimiter occurrence, the region between the next `"` and
    /// the following unescaped `"` is scanned. A region with no closing
    /// quote before end-of-text is logged, reported in the outcome, and
    /// left untouched.
    pub fn rewrite(&self, text: &[u8]) -> RewriteOutcome {
        let mut edits = Vec::new();
        let mut regions = 0usize;
        let mut unterminated = Vec::new();

        let mut search_from = 0usize;
        while let Some(pos) = find(text, &self.delimiter, search_from) {
            // The region opens at the first quote at or after the delimiter;
            // if the text has no quote left, no region can ever start.
            let Some(start) = find_byte(text, b'"', pos) else {
                break;
            };

            match find_closing_quote(text, start) {
                Some(end) => {
                    self.scan_region(text, start + 1, end, &mut edits);
                    regions += 1;
                    search_from = end + 1;
                }
                None => {
                    tracing::warn!(
                        offset = pos,
                        context = %excerpt(text, pos),
                        "unable to process SQL statement: no closing quote"
                    );
                    unterminated.push(UnterminatedRegion {
                        offset: pos,
                        context: excerpt(text, pos),
                    });
                    // Resume just past the unmatched opening quote.
                    search_from = start + 1;
                }
            }
        }

        let keywords_matched = edits.len();
        let mut out = text.to_vec();
        for edit in &edits {
            out[edit.offset..edit.offset + edit.replacement.len()]
                .copy_from_slice(&edit.replacement);
        }

        RewriteOutcome {
            text: out,
            keywords_matched,
            regions,
            unterminated,
        }
    }

    /// Split `[from, to)` on spaces and record an edit for each keyword
    /// token. A region with no space yields one token spanning the whole
    /// region; consecutive spaces yield empty tokens, which never match.
    fn scan_region(&self, text: &[u8], from: usize, to: usize, edits: &mut Vec<Edit>) {
        let mut token_start = from;
        let mut i = from;
        while i <= to {
            if i == to || text[i] == b' ' {
                self.match_token(text, token_start, i, edits);
                token_start = i + 1;
            }
            i += 1;
        }
    }

    /// Record a case-folding edit if `[from, to)` is a keyword token.
    fn match_token(&self, text: &[u8], from: usize, to: usize, edits: &mut Vec<Edit>) {
        if from >= to {
            return;
        }
        let token = &text[from..to];
        let upper = token.to_ascii_uppercase();
        // Keywords are pure ASCII, so a non-UTF-8 token can never match.
        let Ok(upper_str) = std::str::from_utf8(&upper) else {
            return;
        };
        if !keywords::is_keyword(upper_str) {
            return;
        }
        let replacement = match self.mode {
            CaseMode::Upper => upper,
            CaseMode::Lower => token.to_ascii_lowercase(),
        };
        edits.push(Edit {
            offset: from,
            replacement,
        });
    }
}

/// Find the next `"` after `start` that is not immediately preceded by a
/// backslash. Only the single preceding byte is checked; `\\"` still
/// counts as escaped.
fn find_closing_quote(text: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < text.len() {
        if text[i] == b'"' && text[i - 1] != b'\\' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Byte-slice substring search starting at `from`. An empty needle
/// matches at `from`.
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| from + i)
}

/// Position of `byte` at or after `from`.
fn find_byte(haystack: &[u8], byte: u8, from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .iter()
        .position(|&b| b == byte)
        .map(|i| from + i)
}

/// Up to twenty bytes of context around `offset`, rendered lossily.
fn excerpt(text: &[u8], offset: usize) -> String {
    let lo = offset.saturating_sub(10);
    let hi = (offset + 10).min(text.len());
    String::from_utf8_lossy(&text[lo..hi]).into_owned()
}
