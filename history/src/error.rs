//! Error types for history storage.
//!
//! A missing history file is not an error: it loads as an empty history.

use thiserror::Error;

/// Errors that can occur while reading or writing the history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The history path has no file name to write next to.
    #[error("invalid history path: {0}")]
    InvalidPath(String),
}

/// Convenience alias for results with [`HistoryError`].
pub type Result<T> = std::result::Result<T, HistoryError>;
