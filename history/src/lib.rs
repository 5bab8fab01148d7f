//! Persistent command history with consecutive-duplicate compression.
//!
//! A shell keeps the commands of the current session in entry order and, on
//! exit, merges them in front of the persisted history before rewriting the
//! history file once.
//!
//! # Quick start
//!
//! ```no_run
//! use command_less_history::{HistoryFile, HistoryPolicy, PersistOutcome};
//!
//! let file = HistoryFile::new(".history");
//! let session = vec!["ls".to_string(), "ls".to_string(), "pwd".to_string()];
//!
//! match file.persist(&session, &HistoryPolicy::default()).unwrap() {
//!     PersistOutcome::Written { lines } => println!("saved {lines} commands"),
//!     PersistOutcome::Skipped => println!("nothing to save"),
//! }
//! ```

mod compress;
mod error;
mod store;

pub use compress::{HistoryPolicy, compress_consecutive, dedup_all, merge};
pub use error::{HistoryError, Result};
pub use store::{HistoryFile, PersistOutcome};
