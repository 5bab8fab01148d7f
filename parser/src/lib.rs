//! Single-pass command-line option parsing with usage and man page rendering.
//!
//! Options are declared once in an [`OptionTable`](command_less_core::OptionTable)
//! and parsed from an argument list into
//! [`ResolvedOptions`](command_less_core::ResolvedOptions), with every
//! declared option present in the result.
//!
//! # Supported forms
//!
//! | Form | Meaning |
//! |------|---------|
//! | `-a` | short option; takes the next token unless boolean |
//! | `-abc` | combined short options, left to right |
//! | `-o=value` | short option with inline value |
//! | `--name` | long option; takes the next token unless boolean |
//! | `--name=value` | long option with inline value |
//!
//! A boolean option followed by `true` or `false` takes that token as its
//! value; otherwise it resolves to the negation of its default.
//!
//! # Main entry points
//!
//! - [`parse`]: parse an explicit argument list.
//! - [`CommandLine`]: capture the process arguments once and keep the
//!   rendered help text next to them.
//! - [`render_usage`] / [`render_man`]: help output.
//!
//! # Example
//!
//! ```
//! use command_less::parse;
//! use command_less_core::{OptionSpec, OptionTable, OptionValue};
//!
//! let table = OptionTable::new()
//!     .option("all", OptionSpec::boolean('a', "All", false))
//!     .option("brief", OptionSpec::boolean('b', "Brief", false))
//!     .option("limit", OptionSpec::int('l', "Limit", 10));
//!
//! let options = parse(&table, ["-ab", "--limit=5"]).unwrap();
//! assert!(options.flag("all"));
//! assert!(options.flag("brief"));
//! assert_eq!(options.get("limit"), Some(&OptionValue::Text("5".into())));
//! ```

mod command_line;
mod error;
mod help;
pub mod lexer;
mod parser;

pub use command_line::CommandLine;
pub use error::{ParseError, Result};
pub use help::{HelpStyle, LONG_NAME_TAB_THRESHOLD, TYPE_TAB_THRESHOLD, render_man, render_usage};
pub use parser::parse;
