//! Error types for option parsing.

use command_less_core::TableError;
use thiserror::Error;

/// Errors that abort a parse. No partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An argument matches neither the short nor the long option grammar.
    #[error("Don't recognize token format {0}")]
    MalformedToken(String),

    /// A well-formed key that no declared option maps to.
    #[error("Unknown option {key} in args {}", .args.join(", "))]
    UnknownOption { key: String, args: Vec<String> },

    /// A value-bearing option with no value token left to consume.
    #[error("missing value for option --{option}")]
    MissingValue { option: String },

    /// The option table itself is inconsistent.
    #[error("invalid option table: {0}")]
    InvalidTable(#[from] TableError),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
