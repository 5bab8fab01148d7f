use std::ffi::OsString;

use command_less_core::{OptionTable, ProgramMeta, ResolvedOptions};
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::help::{HelpStyle, render_man, render_usage};

/// Argument list captured once, plus the help text of the last parse.
///
/// # Examples
///
/// ```
/// use command_less::{CommandLine, HelpStyle};
/// use command_less_core::{OptionSpec, OptionTable, ProgramMeta};
///
/// let table = OptionTable::new().option("help", OptionSpec::boolean('h', "Show help", false));
/// let mut cli = CommandLine::new(ProgramMeta::new("tool", "1.0"), HelpStyle::Usage, ["-h"]);
///
/// let options = cli.parse(&table).unwrap();
/// assert!(options.flag("help"));
/// assert!(cli.help().unwrap().contains("h | help"));
/// ```
#[derive(Debug, Clone)]
pub struct CommandLine {
    meta: ProgramMeta,
    style: HelpStyle,
    args: Vec<String>,
    help: Option<String>,
}

impl CommandLine {
    pub fn new<I, S>(meta: ProgramMeta, style: HelpStyle, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            meta,
            style,
            args: args.into_iter().map(Into::into).collect(),
            help: None,
        }
    }

    /// Captures the process arguments, skipping the program path.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedToken`](ParseError::MalformedToken) for an argument
    /// that is not valid UTF-8.
    pub fn from_env(meta: ProgramMeta, style: HelpStyle) -> Result<Self> {
        Self::from_os_args(meta, style, std::env::args_os().skip(1))
    }

    /// Like [`new`](Self::new), but fails on the first argument that is not
    /// valid UTF-8.
    pub fn from_os_args<I>(meta: ProgramMeta, style: HelpStyle, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|raw| ParseError::MalformedToken(raw.to_string_lossy().into_owned()))
            })
            .collect::<Result<Vec<String>>>()?;
        Ok(Self::new(meta, style, args))
    }

    /// Parses the captured arguments against `table`.
    ///
    /// The help text for `table` is rendered first and kept for
    /// [`help`](Self::help), even when parsing fails.
    pub fn parse(&mut self, table: &OptionTable) -> Result<ResolvedOptions> {
        debug!(
            program = %self.meta.name,
            version = %self.meta.version,
            "Initializing option parser"
        );

        self.help = Some(match self.style {
            HelpStyle::Usage => render_usage(&self.meta.name, table),
            HelpStyle::Man => render_man(table, &self.meta),
        });

        crate::parse(table, &self.args)
    }

    /// Help text rendered by the last [`parse`](Self::parse).
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn meta(&self) -> &ProgramMeta {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use command_less_core::OptionSpec;

    use super::*;

    #[test]
    fn test_help_available_after_failed_parse() {
        let table = OptionTable::new().option("debug", OptionSpec::boolean('d', "Debug", false));
        let mut cli = CommandLine::new(
            ProgramMeta::new("tool", "1.0").with_author("me"),
            HelpStyle::Man,
            ["--bogus"],
        );

        assert!(cli.help().is_none());
        let err = cli.parse(&table).unwrap_err();
        assert!(matches!(err, ParseError::UnknownOption { .. }));
        assert!(cli.help().unwrap().ends_with("AUTHOR\n\tme\n\n"));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let table = OptionTable::new().option("debug", OptionSpec::boolean('d', "Debug", false));
        let mut cli = CommandLine::new(ProgramMeta::new("tool", "1.0"), HelpStyle::Usage, ["-d"]);

        let first = cli.parse(&table).unwrap();
        let second = cli.parse(&table).unwrap();
        assert_eq!(first, second);
        assert_eq!(cli.args(), ["-d".to_string()]);
    }

    #[test]
    fn test_os_args_accepts_utf8() {
        let args = ["--debug", "true"].map(OsString::from);
        let cli = CommandLine::from_os_args(ProgramMeta::new("tool", "1.0"), HelpStyle::Usage, args)
            .unwrap();
        assert_eq!(cli.args(), ["--debug".to_string(), "true".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_os_args_rejects_invalid_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("--historyFile"),
            OsString::from_vec(b"hist\xff".to_vec()),
        ];
        let err = CommandLine::from_os_args(ProgramMeta::new("tool", "1.0"), HelpStyle::Usage, args)
            .unwrap_err();
        assert_eq!(err, ParseError::MalformedToken("hist\u{FFFD}".to_string()));
    }
}
