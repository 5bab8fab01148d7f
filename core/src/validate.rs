//! Option table validation.
//!
//! Checks the structural invariants the parser relies on: every option has a
//! well-formed long name and an ASCII alphanumeric short name, and both are
//! unique across the table.
//!
//! # Examples
//!
//! ```
//! use command_less_core::*;
//!
//! let table = OptionTable::new()
//!     .option("debug", OptionSpec::boolean('d', "Debug", false))
//!     .option("dryRun", OptionSpec::boolean('d', "Dry run", false));
//!
//! assert_eq!(
//!     validate_table(&table),
//!     vec![TableError::DuplicateShort('d')]
//! );
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::OptionTable;

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$").expect("static regex must compile")
});

/// Returns `true` if `name` is a valid option identifier: ASCII alphanumerics
/// plus `.`, `_` and `-`, with an alphanumeric first and last character.
///
/// # Examples
///
/// ```
/// use command_less_core::is_identifier;
///
/// assert!(is_identifier("history-file"));
/// assert!(is_identifier("a"));
/// assert!(!is_identifier("-debug"));
/// assert!(!is_identifier("debug_"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Option table validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A long name is empty.
    #[error("option long name cannot be empty")]
    EmptyLongName,
    /// A long name is not a valid identifier.
    #[error("invalid long option name: {0}")]
    InvalidLongName(String),
    /// A short name is not an ASCII alphanumeric character.
    #[error("invalid short option name '{short}' for --{long}")]
    InvalidShortName { long: String, short: char },
    /// Two options share a long name.
    #[error("duplicate long option: --{0}")]
    DuplicateLong(String),
    /// Two options share a short name.
    #[error("duplicate short option: -{0}")]
    DuplicateShort(char),
}

/// Validates an option table, stopping at the first error.
pub fn validate_table(table: &OptionTable) -> Vec<TableError> {
    let mut errors = Vec::new();
    let mut longs: HashSet<&str> = HashSet::new();
    let mut shorts: HashSet<char> = HashSet::new();

    for entry in table.iter() {
        let long = entry.long.as_str();
        if long.trim().is_empty() {
            errors.push(TableError::EmptyLongName);
            return errors;
        }
        if !is_identifier(long) {
            errors.push(TableError::InvalidLongName(long.to_string()));
            return errors;
        }
        if !entry.spec.short.is_ascii_alphanumeric() {
            errors.push(TableError::InvalidShortName {
                long: long.to_string(),
                short: entry.spec.short,
            });
            return errors;
        }
        if !longs.insert(long) {
            errors.push(TableError::DuplicateLong(long.to_string()));
            return errors;
        }
        if !shorts.insert(entry.spec.short) {
            errors.push(TableError::DuplicateShort(entry.spec.short));
            return errors;
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::OptionSpec;

    use super::*;

    #[test]
    fn test_identifier_separators() {
        assert!(is_identifier("full.errors"));
        assert!(is_identifier("full_errors"));
        assert!(is_identifier("x1"));
        assert!(!is_identifier("full errors"));
        assert!(!is_identifier(".hidden"));
        assert!(!is_identifier("naïve"));
    }

    #[test]
    fn test_validate_table_rejects_duplicate_long() {
        let table = OptionTable::new()
            .option("debug", OptionSpec::boolean('d', "", false))
            .option("debug", OptionSpec::boolean('x', "", false));

        assert_eq!(
            validate_table(&table),
            vec![TableError::DuplicateLong("debug".to_string())]
        );
    }

    #[test]
    fn test_validate_table_rejects_bad_short() {
        let table = OptionTable::new().option("debug", OptionSpec::boolean('-', "", false));

        assert_eq!(
            validate_table(&table),
            vec![TableError::InvalidShortName {
                long: "debug".to_string(),
                short: '-',
            }]
        );
    }

    #[test]
    fn test_validate_table_rejects_bad_long() {
        let table = OptionTable::new().option("--debug", OptionSpec::boolean('d', "", false));
        assert_eq!(
            validate_table(&table),
            vec![TableError::InvalidLongName("--debug".to_string())]
        );

        let table = OptionTable::new().option(" ", OptionSpec::boolean('d', "", false));
        assert_eq!(validate_table(&table), vec![TableError::EmptyLongName]);
    }

    #[test]
    fn test_validate_table_accepts_valid_table() {
        let table = OptionTable::new()
            .option("compressHistory", OptionSpec::boolean('c', "", true))
            .option("historyLimit", OptionSpec::int('l', "", 1000));

        assert!(validate_table(&table).is_empty());
    }
}
