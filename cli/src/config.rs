//! Typed shell configuration built from the parsed command-line options.

use std::path::PathBuf;

use command_less_core::{OptionSpec, OptionTable, ResolvedOptions};
use command_less_history::HistoryPolicy;
use thiserror::Error;

/// Configuration errors detected after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `--historyLimit` is not a non-negative integer.
    #[error("invalid history limit: {0}")]
    InvalidHistoryLimit(String),
}

/// Options every `lil-repl` invocation understands.
pub fn option_table() -> OptionTable {
    OptionTable::new()
        .option("compressHistory", OptionSpec::boolean('c', "Remove repeat commands from history", true))
        .option("debug", OptionSpec::boolean('d', "Enable debug mode without using environment var", false))
        .option("fullErrors", OptionSpec::boolean('e', "Show full error messages.", false))
        .option("help", OptionSpec::boolean('h', "Show this help message", false))
        .option("historyFile", OptionSpec::path('f', "Command history file", ".history"))
        .option("historyLimit", OptionSpec::int('l', "Command history limit", 1000))
        .option("saveAllCommands", OptionSpec::boolean('s', "Save all commands in history", false))
        .option("uniqueCommands", OptionSpec::boolean('u', "Only save unique commands in history", false))
        .option("version", OptionSpec::boolean('v', "Show version number", false))
}

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub history_file: PathBuf,
    /// How session history is merged into the file on exit.
    pub policy: HistoryPolicy,
    pub debug: bool,
    /// Print detailed error messages for rejected commands.
    pub full_errors: bool,
    /// Record rejected commands in history too.
    pub save_all_commands: bool,
}

impl ReplConfig {
    /// Builds the configuration from options parsed against [`option_table`].
    ///
    /// A history limit of `0` means unlimited.
    pub fn from_options(options: &ResolvedOptions) -> Result<Self, ConfigError> {
        let limit = match options.int("historyLimit") {
            Some(0) => None,
            Some(n) => Some(
                usize::try_from(n)
                    .map_err(|_| ConfigError::InvalidHistoryLimit(n.to_string()))?,
            ),
            None => {
                let raw = options.text("historyLimit").unwrap_or_default();
                return Err(ConfigError::InvalidHistoryLimit(raw));
            }
        };

        Ok(Self {
            history_file: PathBuf::from(options.text("historyFile").unwrap_or_default()),
            policy: HistoryPolicy {
                compress: options.flag("compressHistory"),
                unique: options.flag("uniqueCommands"),
                limit,
            },
            debug: options.flag("debug"),
            full_errors: options.flag("fullErrors"),
            save_all_commands: options.flag("saveAllCommands"),
        })
    }
}

#[cfg(test)]
mod tests {
    use command_less::parse;

    use super::*;

    fn config(args: &[&str]) -> Result<ReplConfig, ConfigError> {
        let options = parse(&option_table(), args).unwrap();
        ReplConfig::from_options(&options)
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.history_file, PathBuf::from(".history"));
        assert_eq!(
            config.policy,
            HistoryPolicy {
                compress: true,
                unique: false,
                limit: Some(1000),
            }
        );
        assert!(!config.debug);
        assert!(!config.full_errors);
        assert!(!config.save_all_commands);
    }

    #[test]
    fn test_flags_flip_defaults() {
        let config = config(&["-cdesu", "-f", "/tmp/h", "--historyLimit=0"]).unwrap();

        assert_eq!(config.history_file, PathBuf::from("/tmp/h"));
        assert!(!config.policy.compress);
        assert!(config.policy.unique);
        assert_eq!(config.policy.limit, None);
        assert!(config.debug);
        assert!(config.full_errors);
        assert!(config.save_all_commands);
    }

    #[test]
    fn test_bad_history_limit() {
        assert_eq!(
            config(&["-l", "lots"]),
            Err(ConfigError::InvalidHistoryLimit("lots".to_string()))
        );
        assert_eq!(
            config(&["-l", "-5"]),
            Err(ConfigError::InvalidHistoryLimit("-5".to_string()))
        );
    }
}
