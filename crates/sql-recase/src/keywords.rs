//! Keyword recognition for SQL reserved words.
//!
//! The vocabulary is the fixed SQLite reserved-word list. Lookup is
//! case-sensitive against the uppercase spellings; callers upper-case
//! candidate tokens before asking.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Set of uppercase SQL keyword strings.
static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "ABORT",
        "ACTION",
        "ADD",
        "AFTER",
        "ALL",
        "ALTER",
        "ALWAYS",
        "ANALYZE",
        "AND",
        "AS",
        "ASC",
        "ATTACH",
        "AUTOINCREMENT",
        "BEFORE",
        "BEGIN",
        "BETWEEN",
        "BY",
        "CASCADE",
        "CASE",
        "CAST",
        "CHECK",
        "COLLATE",
        "COLUMN",
        "COMMIT",
        "CONFLICT",
        "CONSTRAINT",
        "CREATE",
        "CROSS",
        "CURRENT",
        "CURRENT_DATE",
        "CURRENT_TIME",
        "CURRENT_TIMESTAMP",
        "DATABASE",
        "DEFAULT",
        "DEFERRABLE",
        "DEFERRED",
        "DELETE",
        "DESC",
        "DETACH",
        "DISTINCT",
        "DO",
        "DROP",
        "EACH",
        "ELSE",
        "END",
        "ESCAPE",
        "EXCEPT",
        "EXCLUDE",
        "EXCLUSIVE",
        "EXISTS",
        "EXPLAIN",
        "FAIL",
        "FILTER",
        "FIRST",
        "FOLLOWING",
        "FOR",
        "FOREIGN",
        "FROM",
        "FULL",
        "GENERATED",
        "GLOB",
        "GROUP",
        "GROUPS",
        "HAVING",
        "IF",
        "IGNORE",
        "IMMEDIATE",
        "IN",
        "INDEX",
        "INDEXED",
        "INITIALLY",
        "INNER",
        "INSERT",
        "INSTEAD",
        "INTERSECT",
        "INTO",
        "IS",
        "ISNULL",
        "JOIN",
        "KEY",
        "LAST",
        "LEFT",
        "LIKE",
        "LIMIT",
        "MATCH",
        "NATURAL",
        "NO",
        "NOT",
        "NOTHING",
        "NOTNULL",
        "NULL",
        "NULLS",
        "OF",
        "OFFSET",
        "ON",
        "OR",
        "ORDER",
        "OTHERS",
        "OUTER",
        "OVER",
        "PARTITION",
        "PLAN",
        "PRAGMA",
        "PRECEDING",
        "PRIMARY",
        "QUERY",
        "RAISE",
        "RANGE",
        "RECURSIVE",
        "REFERENCES",
        "REGEXP",
        "REINDEX",
        "RELEASE",
        "RENAME",
        "REPLACE",
        "RESTRICT",
        "RETURNING",
        "RIGHT",
        "ROLLBACK",
        "ROW",
        "ROWS",
        "SAVEPOINT",
        "SELECT",
        "SET",
        "TABLE",
        "TEMP",
        "TEMPORARY",
        "THEN",
        "TIES",
        "TO",
        "TRANSACTION",
        "TRIGGER",
        "UNBOUNDED",
        "UNION",
        "UNIQUE",
        "UPDATE",
        "USING",
        "VACUUM",
        "VALUES",
        "VIEW",
        "VIRTUAL",
        "WHEN",
        "WHERE",
        "WINDOW",
        "WITH",
        "WITHOUT",
    ])
});

/// Check whether a word is a reserved SQL keyword.
///
/// The lookup is case-sensitive against the uppercase vocabulary, so
/// callers upper-case candidate tokens first.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Iterate over the full keyword vocabulary.
pub fn all() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert!(is_keyword("SELECT"));
        assert!(is_keyword("FROM"));
        assert!(is_keyword("CURRENT_TIMESTAMP"));
        assert!(is_keyword("RETURNING"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Callers normalize to uppercase before asking.
        assert!(!is_keyword("select"));
        assert!(!is_keyword("Select"));
    }

    #[test]
    fn test_non_keyword() {
        assert!(!is_keyword("CUSTOMER"));
        assert!(!is_keyword("WS-NAME"));
        assert!(!is_keyword(""));
        assert!(!is_keyword("SELECT,"));
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(all().count(), 146);
    }

    #[test]
    fn test_vocabulary_is_uppercase() {
        for word in all() {
            assert_eq!(word, word.to_ascii_uppercase(), "{word} is not uppercase");
        }
    }
}
