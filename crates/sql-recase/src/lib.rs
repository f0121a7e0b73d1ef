//! SQL keyword recasing for statements embedded in source files.
//!
//! This crate provides the scanning core of the `sql-recase` tool:
//! - A fixed vocabulary of SQL reserved words with efficient lookup
//! - A scanner that locates delimiter-anchored double-quoted regions in raw
//!   file text and rewrites the case of keyword tokens inside them
//!
//! The scan is purely lexical: regions are split on the space character and
//! each token is compared, after ASCII upper-casing, against the vocabulary.
//! Rewrites are always length-preserving, so a rewritten buffer has exactly
//! the byte length of its input.
//!
//! # Example
//!
//! ```
//! use sql_recase::{CaseMode, StatementRewriter};
//!
//! let rewriter = StatementRewriter::new(None, CaseMode::Upper);
//! let outcome = rewriter.rewrite(br#"db.exec("select id from users");"#);
//! assert_eq!(outcome.text, br#"db.exec("SELECT id FROM users");"#);
//! ```

pub mod keywords;
pub mod rewrite;

pub use rewrite::{CaseMode, RewriteOutcome, StatementRewriter, UnterminatedRegion};
