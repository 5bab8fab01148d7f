//! Core types and validation for declarative command-line option tables.
//!
//! This crate defines the data model shared by the option parser and the help
//! renderer:
//!
//! - [`OptionSpec`]: one option (short name, description, value type,
//!   default).
//! - [`OptionTable`]: ordered mapping from long name to [`OptionSpec`].
//! - [`ResolvedOptions`]: the result of a parse, one value per declared
//!   option.
//! - [`ProgramMeta`]: program name, version, description and author used in
//!   help output.
//!
//! Validation ([`validate_table`]) catches duplicate or malformed names before
//! a parse relies on them.
//!
//! # Example
//!
//! ```
//! use command_less_core::*;
//!
//! let table = OptionTable::new()
//!     .option("debug", OptionSpec::boolean('d', "Enable debug mode", false))
//!     .option("historyLimit", OptionSpec::int('l', "Command history limit", 1000));
//!
//! assert!(validate_table(&table).is_empty());
//! assert_eq!(table.get("historyLimit").unwrap().spec.default, OptionValue::Int(1000));
//! ```

mod meta;
mod types;
mod validate;

pub use meta::{DEFAULT_VERSION, ProgramMeta};
pub use types::*;
pub use validate::{TableError, is_identifier, validate_table};
