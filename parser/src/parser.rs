//! Single-pass option parser.
//!
//! A [`ParserState`] is built fresh for every call to [`parse`]. It owns the
//! remaining argument queue and the short/long lookup tables derived from the
//! [`OptionTable`], and consumes one option occurrence per step until the
//! queue is empty. Options never mentioned in the arguments are filled from
//! their declared defaults, so the result always has exactly the declared key
//! set.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use command_less_core::{OptionEntry, OptionTable, OptionValue, ResolvedOptions, validate_table};
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::lexer::{Token, classify};

/// Parses `args` against `table`.
///
/// # Errors
///
/// - [`ParseError::InvalidTable`] if the table has duplicate or malformed
///   names.
/// - [`ParseError::MalformedToken`] if an argument matches neither grammar.
/// - [`ParseError::UnknownOption`] if a key is not declared.
/// - [`ParseError::MissingValue`] if a non-boolean option has no value token.
///
/// # Examples
///
/// ```
/// use command_less::parse;
/// use command_less_core::{OptionSpec, OptionTable, OptionValue};
///
/// let table = OptionTable::new()
///     .option("debug", OptionSpec::boolean('d', "Enable debug mode", false))
///     .option("historyFile", OptionSpec::path('f', "Command history file", ".history"));
///
/// let options = parse(&table, ["-d", "--historyFile", "/tmp/h"]).unwrap();
/// assert_eq!(options.get("debug"), Some(&OptionValue::Bool(true)));
/// assert_eq!(options.text("historyFile").as_deref(), Some("/tmp/h"));
/// ```
pub fn parse<I, S>(table: &OptionTable, args: I) -> Result<ResolvedOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    ParserState::new(table, args)?.run()
}

/// A lookup key as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Key {
    Short(char),
    Long(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Short(c) => write!(f, "{c}"),
            Key::Long(name) => f.write_str(name),
        }
    }
}

struct ParserState<'t> {
    table: &'t OptionTable,
    /// Original arguments, kept for diagnostics.
    args: Vec<String>,
    remaining: VecDeque<String>,
    /// Flags still to process from a combined short token.
    pending: VecDeque<char>,
    long_to_short: HashMap<&'t str, char>,
    short_to_long: HashMap<char, &'t str>,
    resolved: HashMap<&'t str, OptionValue>,
}

impl<'t> ParserState<'t> {
    fn new(table: &'t OptionTable, args: Vec<String>) -> Result<Self> {
        if let Some(err) = validate_table(table).into_iter().next() {
            return Err(err.into());
        }

        let mut long_to_short = HashMap::with_capacity(table.len());
        let mut short_to_long = HashMap::with_capacity(table.len());
        for entry in table.iter() {
            long_to_short.insert(entry.long.as_str(), entry.spec.short);
            short_to_long.insert(entry.spec.short, entry.long.as_str());
        }

        debug!(
            options = table.len(),
            args = ?args,
            "Parsing command-line options"
        );

        Ok(Self {
            table,
            remaining: args.iter().cloned().collect(),
            args,
            pending: VecDeque::new(),
            long_to_short,
            short_to_long,
            resolved: HashMap::new(),
        })
    }

    fn run(mut self) -> Result<ResolvedOptions> {
        while let Some((long, value)) = self.next_option()? {
            debug!(option = long, value = %value, "Resolved option");
            self.resolved.insert(long, value);
        }
        Ok(self.finish())
    }

    /// Consumes one option occurrence, returning `None` once the arguments
    /// are exhausted.
    fn next_option(&mut self) -> Result<Option<(&'t str, OptionValue)>> {
        if let Some(key) = self.pending.pop_front() {
            let entry = self.lookup(&Key::Short(key))?;
            // Only the last flag of a combined token may take the next token.
            let value = if self.pending.is_empty() {
                self.next_value(entry)?
            } else {
                implicit_value(entry)?
            };
            return Ok(Some((entry.long.as_str(), value)));
        }

        let Some(arg) = self.remaining.pop_front() else {
            return Ok(None);
        };

        let token = classify(&arg);
        debug!(arg = %arg, token = ?token, "Classified argument");

        let (entry, value) = match token {
            Token::ShortEq { key, value } => {
                let entry = self.lookup(&Key::Short(key))?;
                (entry, explicit_value(entry, value))
            }
            Token::LongEq { key, value } => {
                let entry = self.lookup(&Key::Long(key))?;
                (entry, explicit_value(entry, value))
            }
            Token::ShortSingle(key) => {
                let entry = self.lookup(&Key::Short(key))?;
                (entry, self.next_value(entry)?)
            }
            Token::LongBare(key) => {
                let entry = self.lookup(&Key::Long(key))?;
                (entry, self.next_value(entry)?)
            }
            Token::ShortCombined(keys) => {
                self.pending.extend(keys);
                return self.next_option();
            }
            Token::Malformed(arg) => return Err(ParseError::MalformedToken(arg)),
        };

        Ok(Some((entry.long.as_str(), value)))
    }

    /// Resolves the value of an option written without `=`.
    fn next_value(&mut self, entry: &OptionEntry) -> Result<OptionValue> {
        if !entry.spec.value_type.is_boolean() {
            return self
                .remaining
                .pop_front()
                .map(OptionValue::Text)
                .ok_or_else(|| ParseError::MissingValue {
                    option: entry.long.clone(),
                });
        }

        match self.remaining.front().and_then(|next| parse_bool(next)) {
            Some(value) => {
                self.remaining.pop_front();
                Ok(OptionValue::Bool(value))
            }
            None => Ok(OptionValue::Bool(!entry.spec.default.is_truthy())),
        }
    }

    fn lookup(&self, key: &Key) -> Result<&'t OptionEntry> {
        let long = match key {
            Key::Short(c) => self
                .short_to_long
                .get(c)
                .copied()
                .or_else(|| self.declared_long(&c.to_string())),
            Key::Long(name) => self.declared_long(name).or_else(|| {
                single_char(name).and_then(|c| self.short_to_long.get(&c).copied())
            }),
        };

        let table: &'t OptionTable = self.table;
        long.and_then(|long| table.get(long))
            .ok_or_else(|| ParseError::UnknownOption {
                key: key.to_string(),
                args: self.args.clone(),
            })
    }

    fn declared_long(&self, name: &str) -> Option<&'t str> {
        self.long_to_short.get_key_value(name).map(|(long, _)| *long)
    }

    fn finish(mut self) -> ResolvedOptions {
        let table = self.table;
        table
            .iter()
            .map(|entry| {
                let value = self
                    .resolved
                    .remove(entry.long.as_str())
                    .unwrap_or_else(|| entry.spec.default.clone());
                (entry.long.clone(), value)
            })
            .collect()
    }
}

/// Value of a flag inside a combined token that cannot consume a value token.
fn implicit_value(entry: &OptionEntry) -> Result<OptionValue> {
    if entry.spec.value_type.is_boolean() {
        Ok(OptionValue::Bool(!entry.spec.default.is_truthy()))
    } else {
        Err(ParseError::MissingValue {
            option: entry.long.clone(),
        })
    }
}

/// Value given with `=`.
fn explicit_value(entry: &OptionEntry, value: String) -> OptionValue {
    if entry.spec.value_type.is_boolean() {
        if let Some(b) = parse_bool(&value) {
            return OptionValue::Bool(b);
        }
    }
    OptionValue::Text(value)
}

fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn single_char(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use command_less_core::{OptionSpec, TableError};

    use super::*;

    fn table() -> OptionTable {
        OptionTable::new()
            .option("all", OptionSpec::boolean('a', "All", false))
            .option("brief", OptionSpec::boolean('b', "Brief", false))
            .option("color", OptionSpec::boolean('c', "Color", true))
            .option("output", OptionSpec::path('o', "Output file", "out.txt"))
            .option("level", OptionSpec::int('l', "Level", 3))
    }

    #[test]
    fn test_defaults_when_no_args() {
        let options = parse(&table(), Vec::<String>::new()).unwrap();

        assert_eq!(
            options.keys().collect::<Vec<_>>(),
            vec!["all", "brief", "color", "output", "level"]
        );
        assert_eq!(options.get("color"), Some(&OptionValue::Bool(true)));
        assert_eq!(options.get("level"), Some(&OptionValue::Int(3)));
    }

    #[test]
    fn test_bare_boolean_negates_default() {
        let options = parse(&table(), ["-a", "--color"]).unwrap();

        assert_eq!(options.get("all"), Some(&OptionValue::Bool(true)));
        assert_eq!(options.get("color"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_boolean_accepts_explicit_value_token() {
        let options = parse(&table(), ["-a", "FALSE", "--color", "True"]).unwrap();

        assert_eq!(options.get("all"), Some(&OptionValue::Bool(false)));
        assert_eq!(options.get("color"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_boolean_does_not_take_lookalike_token() {
        let err = parse(&table(), ["-a", "trueish"]).unwrap_err();
        assert_eq!(err, ParseError::MalformedToken("trueish".to_string()));
    }

    #[test]
    fn test_boolean_eq_value() {
        let options = parse(&table(), ["--color=false", "-a=yes"]).unwrap();

        assert_eq!(options.get("color"), Some(&OptionValue::Bool(false)));
        assert_eq!(options.get("all"), Some(&OptionValue::from("yes")));
    }

    #[test]
    fn test_value_taken_verbatim() {
        let options = parse(&table(), ["-o", "--all"]).unwrap();

        assert_eq!(options.text("output").as_deref(), Some("--all"));
        assert_eq!(options.get("all"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_combined_last_flag_takes_value() {
        let options = parse(&table(), ["-abo", "x.txt"]).unwrap();

        assert!(options.flag("all"));
        assert!(options.flag("brief"));
        assert_eq!(options.text("output").as_deref(), Some("x.txt"));
    }

    #[test]
    fn test_combined_value_flag_before_last_is_missing_value() {
        let err = parse(&table(), ["-oa", "x.txt"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingValue {
                option: "output".to_string()
            }
        );
    }

    #[test]
    fn test_missing_value_at_end() {
        let err = parse(&table(), ["--level"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingValue {
                option: "level".to_string()
            }
        );
    }

    #[test]
    fn test_later_occurrence_wins() {
        let options = parse(&table(), ["-l", "1", "--level=9"]).unwrap();
        assert_eq!(options.int("level"), Some(9));
    }

    #[test]
    fn test_long_key_falls_back_to_short_table() {
        let options = parse(&table(), ["--a"]).unwrap();
        assert!(options.flag("all"));
    }

    #[test]
    fn test_unknown_short_in_combined_token() {
        let err = parse(&table(), ["-az"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOption {
                key: "z".to_string(),
                args: vec!["-az".to_string()],
            }
        );
    }

    #[test]
    fn test_invalid_table_rejected_before_parsing() {
        let table = OptionTable::new()
            .option("all", OptionSpec::boolean('a', "", false))
            .option("any", OptionSpec::boolean('a', "", false));

        let err = parse(&table, ["--bogus"]).unwrap_err();
        assert_eq!(err, ParseError::InvalidTable(TableError::DuplicateShort('a')));
    }

    #[test]
    fn test_single_char_helper() {
        assert_eq!(single_char("x"), Some('x'));
        assert_eq!(single_char("xy"), None);
        assert_eq!(single_char(""), None);
    }
}
