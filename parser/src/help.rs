//! Usage and man page rendering.
//!
//! Both renderers are pure functions of the option table (and program
//! metadata). Columns are approximated with tab stops: a long name shorter
//! than [`LONG_NAME_TAB_THRESHOLD`] characters and a type label shorter than
//! [`TYPE_TAB_THRESHOLD`] characters each get an extra tab. Nothing is ever
//! truncated.

use command_less_core::{OptionEntry, OptionTable, ProgramMeta};

/// Long names shorter than this get an extra tab after them.
pub const LONG_NAME_TAB_THRESHOLD: usize = 12;
/// Type labels shorter than this get an extra tab after them.
pub const TYPE_TAB_THRESHOLD: usize = 5;

/// Which help text [`CommandLine`](crate::CommandLine) precomputes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HelpStyle {
    /// Compact usage table.
    #[default]
    Usage,
    /// Sectioned man page.
    Man,
}

/// Renders the usage table: a header followed by one line per option.
///
/// # Examples
///
/// ```
/// use command_less::render_usage;
/// use command_less_core::{OptionSpec, OptionTable};
///
/// let table = OptionTable::new()
///     .option("debug", OptionSpec::boolean('d', "Enable debug mode", false));
///
/// let usage = render_usage("lil-repl", &table);
/// assert!(usage.starts_with("  Usage lil-repl [options]\n"));
/// assert!(usage.ends_with("d | debug\t\t[boolean]\tEnable debug mode (default is false)\n"));
/// ```
pub fn render_usage(program: &str, table: &OptionTable) -> String {
    let mut out = format!(
        "  Usage {program} [options]\n\n\tFlags\n\tName\t\t  Type\t\t\tDescription\n"
    );

    for entry in table.iter() {
        let type_label = entry.spec.value_type.as_str();
        out.push_str(&name_column(entry));
        out.push_str(&format!("[{type_label}]"));
        if type_label.len() < TYPE_TAB_THRESHOLD {
            out.push('\t');
        }
        out.push_str(&format!(
            "\t{} (default is {})\n",
            entry.spec.description, entry.spec.default
        ));
    }

    out
}

/// Renders a man page with NAME, SYNOPSIS, DESCRIPTION, OPTIONS and AUTHOR
/// sections.
///
/// # Examples
///
/// ```
/// use command_less::render_man;
/// use command_less_core::{OptionSpec, OptionTable, ProgramMeta};
///
/// let table = OptionTable::new()
///     .option("version", OptionSpec::boolean('v', "Show version number", false));
/// let meta = ProgramMeta::new("lil-repl", "0.1.0")
///     .with_description("A tiny shell. It remembers.");
///
/// let man = render_man(&table, &meta);
/// assert!(man.contains("NAME\n\tlil-repl - A tiny shell.\n"));
/// assert!(man.contains("v | version\t\tboolean\t - Show version number\n"));
/// assert!(man.ends_with("AUTHOR\n\tN/A\n\n"));
/// ```
pub fn render_man(table: &OptionTable, meta: &ProgramMeta) -> String {
    let mut out = format!(
        "\t\t\t\t\t\"Man Page\"\n\nNAME\n\t{name} - {short}\n\nSYNOPSIS\n\t{name} [options]\n\nDESCRIPTION\n\t{description}\n\nOPTIONS\n\t",
        name = meta.name,
        short = meta.short_description(),
        description = meta.description.as_deref().unwrap_or_default(),
    );

    for entry in table.iter() {
        out.push_str(&name_column(entry));
        out.push_str(&format!(
            "{}\t - {}\n\t",
            entry.spec.value_type, entry.spec.description
        ));
    }

    out.push_str(&format!("\n\nAUTHOR\n\t{}\n\n", meta.author_or_na()));
    out
}

/// `{short} | {long}` plus one or two tabs.
fn name_column(entry: &OptionEntry) -> String {
    let mut column = format!("{} | {}\t", entry.spec.short, entry.long);
    if entry.long.len() < LONG_NAME_TAB_THRESHOLD {
        column.push('\t');
    }
    column
}

#[cfg(test)]
mod tests {
    use command_less_core::OptionSpec;

    use super::*;

    fn table() -> OptionTable {
        OptionTable::new()
            .option("compressHistory", OptionSpec::boolean('c', "Remove repeat commands from history", true))
            .option("historyFile", OptionSpec::path('f', "Command history file", ".history"))
            .option("historyLimit", OptionSpec::int('l', "Command history limit", 1000))
    }

    #[test]
    fn test_usage_tab_stops() {
        let usage = render_usage("repl", &table());
        let lines: Vec<&str> = usage.lines().collect();

        assert_eq!(
            lines[4],
            "c | compressHistory\t[boolean]\tRemove repeat commands from history (default is true)"
        );
        assert_eq!(
            lines[5],
            "f | historyFile\t\t[path]\t\tCommand history file (default is .history)"
        );
        // exactly 12 characters: no extra tab
        assert_eq!(
            lines[6],
            "l | historyLimit\t[int]\t\tCommand history limit (default is 1000)"
        );
    }

    #[test]
    fn test_usage_one_line_per_option() {
        let long_name = "anExtremelyLongOptionNameThatKeepsGoing";
        let table = table().option(long_name, OptionSpec::string('x', "Long", ""));
        let usage = render_usage("repl", &table);

        let option_lines = usage.lines().filter(|l| l.contains(" | ")).count();
        assert_eq!(option_lines, table.len());
        assert!(usage.contains(long_name));
    }

    #[test]
    fn test_man_sections_in_order() {
        let meta = ProgramMeta::new("repl", "1.0")
            .with_description("Reads lines. Saves history.")
            .with_author("l3l_aze");
        let man = render_man(&table(), &meta);

        let positions: Vec<usize> = ["NAME", "SYNOPSIS", "DESCRIPTION", "OPTIONS", "AUTHOR"]
            .iter()
            .map(|section| man.find(section).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(man.contains("SYNOPSIS\n\trepl [options]\n\n"));
        assert!(man.contains("DESCRIPTION\n\tReads lines. Saves history.\n\n"));
        assert!(man.contains("f | historyFile\t\tpath\t - Command history file\n\t"));
        assert!(man.ends_with("AUTHOR\n\tl3l_aze\n\n"));
    }

    #[test]
    fn test_man_without_description() {
        let man = render_man(&table(), &ProgramMeta::new("repl", "1.0"));

        assert!(man.contains("NAME\n\trepl - \n\n"));
        assert!(man.contains("DESCRIPTION\n\t\n\n"));
    }
}
