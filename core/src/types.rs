//! Option table type definitions.
//!
//! This module defines the declarative data model a program uses to describe
//! its command-line options, and the typed result a parse produces. The types
//! serialize with [`serde`] so a resolved option set can be logged or dumped
//! as JSON.

use std::fmt;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Value type label of an option.
///
/// The label is displayed in help output. Only [`ValueType::Boolean`] changes
/// how the parser consumes tokens; every other type takes the next token
/// verbatim.
///
/// # Examples
///
/// ```
/// use command_less_core::ValueType;
///
/// assert_eq!(ValueType::from("boolean"), ValueType::Boolean);
/// assert_eq!(ValueType::from("glob").as_str(), "glob");
/// assert!(ValueType::Boolean.is_boolean());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    /// On/off switch. A bare occurrence negates the default.
    Boolean,
    /// Filesystem path.
    Path,
    /// Integer.
    Int,
    /// Free text.
    String,
    /// Any other free-form label (e.g. `url`, `glob`).
    Other(String),
}

impl ValueType {
    /// Returns the display label (`boolean`, `path`, `int`, `string`, or the
    /// free-form label).
    pub fn as_str(&self) -> &str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::Path => "path",
            ValueType::Int => "int",
            ValueType::String => "string",
            ValueType::Other(label) => label,
        }
    }

    /// Returns `true` for [`ValueType::Boolean`].
    pub fn is_boolean(&self) -> bool {
        matches!(self, ValueType::Boolean)
    }
}

impl From<&str> for ValueType {
    fn from(label: &str) -> Self {
        match label {
            "boolean" => ValueType::Boolean,
            "path" => ValueType::Path,
            "int" => ValueType::Int,
            "string" => ValueType::String,
            other => ValueType::Other(other.to_string()),
        }
    }
}

impl From<String> for ValueType {
    fn from(label: String) -> Self {
        ValueType::from(label.as_str())
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_str().to_string()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A default or resolved option value.
///
/// Values taken from the command line are carried as [`OptionValue::Text`]
/// (no coercion), except for boolean options where `true`/`false` become
/// [`OptionValue::Bool`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl OptionValue {
    /// Truthiness used when a bare boolean flag negates its default.
    ///
    /// `Bool(b)` is `b`, `Int(n)` is `n != 0`, `Text(s)` is non-empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_less_core::OptionValue;
    ///
    /// assert!(OptionValue::Bool(true).is_truthy());
    /// assert!(!OptionValue::Int(0).is_truthy());
    /// assert!(!OptionValue::Text(String::new()).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Int(n) => *n != 0,
            OptionValue::Text(s) => !s.is_empty(),
        }
    }

    /// Returns the boolean value, if this is [`OptionValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, parsing numeric text.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            OptionValue::Text(s) => s.trim().parse().ok(),
            OptionValue::Bool(_) => None,
        }
    }

    /// Returns the text value, if this is [`OptionValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Int(n) => write!(f, "{n}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Declaration of a single option: its short name, description, value type
/// and default.
///
/// Use the typed constructors ([`boolean`](OptionSpec::boolean),
/// [`path`](OptionSpec::path), [`int`](OptionSpec::int),
/// [`string`](OptionSpec::string)) or [`new`](OptionSpec::new) for a custom
/// type label.
///
/// # Examples
///
/// ```
/// use command_less_core::{OptionSpec, OptionValue, ValueType};
///
/// let debug = OptionSpec::boolean('d', "Enable debug mode", false);
/// assert_eq!(debug.value_type, ValueType::Boolean);
/// assert_eq!(debug.default, OptionValue::Bool(false));
///
/// let file = OptionSpec::path('f', "Command history file", ".history");
/// assert_eq!(file.default.to_string(), ".history");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Single-character short name (`d` for `-d`).
    pub short: char,
    /// Description shown in help output.
    pub description: String,
    /// Value type label.
    pub value_type: ValueType,
    /// Value used when the option is absent from the arguments.
    pub default: OptionValue,
}

impl OptionSpec {
    pub fn new(
        short: char,
        description: &str,
        value_type: ValueType,
        default: impl Into<OptionValue>,
    ) -> Self {
        Self {
            short,
            description: description.to_string(),
            value_type,
            default: default.into(),
        }
    }

    /// Creates a boolean option.
    pub fn boolean(short: char, description: &str, default: bool) -> Self {
        Self::new(short, description, ValueType::Boolean, default)
    }

    /// Creates a path option.
    pub fn path(short: char, description: &str, default: &str) -> Self {
        Self::new(short, description, ValueType::Path, default)
    }

    /// Creates an integer option.
    pub fn int(short: char, description: &str, default: i64) -> Self {
        Self::new(short, description, ValueType::Int, default)
    }

    /// Creates a free-text option.
    pub fn string(short: char, description: &str, default: &str) -> Self {
        Self::new(short, description, ValueType::String, default)
    }
}

/// One row of an [`OptionTable`]: the long name and its declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Long name (`historyFile` for `--historyFile`).
    pub long: String,
    #[serde(flatten)]
    pub spec: OptionSpec,
}

/// Ordered, declarative table of options.
///
/// Declaration order is preserved for help output and for the order of
/// [`ResolvedOptions`].
///
/// # Examples
///
/// ```
/// use command_less_core::{OptionSpec, OptionTable};
///
/// let table = OptionTable::new()
///     .option("debug", OptionSpec::boolean('d', "Enable debug mode", false))
///     .option("historyFile", OptionSpec::path('f', "Command history file", ".history"));
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.find_short('f').unwrap().long, "historyFile");
/// assert_eq!(table.long_names(), vec!["debug", "historyFile"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionTable {
    entries: Vec<OptionEntry>,
}

impl OptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option (builder style).
    pub fn option(mut self, long: &str, spec: OptionSpec) -> Self {
        self.push(long, spec);
        self
    }

    /// Appends an option.
    pub fn push(&mut self, long: &str, spec: OptionSpec) {
        self.entries.push(OptionEntry {
            long: long.to_string(),
            spec,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds an option by long name.
    pub fn get(&self, long: &str) -> Option<&OptionEntry> {
        self.entries.iter().find(|e| e.long == long)
    }

    /// Finds an option by short name.
    pub fn find_short(&self, short: char) -> Option<&OptionEntry> {
        self.entries.iter().find(|e| e.spec.short == short)
    }

    /// Long names in declaration order.
    pub fn long_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.long.as_str()).collect()
    }
}

/// Result of a parse: every declared option mapped to its value.
///
/// Keys follow the declaration order of the table that produced it. Values
/// are either taken from the arguments or filled from the declared default.
///
/// # Examples
///
/// ```
/// use command_less_core::{OptionValue, ResolvedOptions};
///
/// let options: ResolvedOptions = vec![
///     ("debug".to_string(), OptionValue::Bool(true)),
///     ("historyLimit".to_string(), OptionValue::Text("50".into())),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(options.flag("debug"));
/// assert_eq!(options.int("historyLimit"), Some(50));
/// assert_eq!(
///     serde_json::to_string(&options).unwrap(),
///     r#"{"debug":true,"historyLimit":"50"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOptions {
    entries: Vec<(String, OptionValue)>,
}

impl ResolvedOptions {
    /// Sets `long` to `value`, replacing an existing entry in place.
    pub fn insert(&mut self, long: &str, value: OptionValue) {
        match self.entries.iter_mut().find(|(k, _)| k == long) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((long.to_string(), value)),
        }
    }

    pub fn get(&self, long: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == long).map(|(_, v)| v)
    }

    /// Truthiness of an option; `false` when absent.
    pub fn flag(&self, long: &str) -> bool {
        self.get(long).is_some_and(OptionValue::is_truthy)
    }

    /// String form of an option value.
    pub fn text(&self, long: &str) -> Option<String> {
        self.get(long).map(ToString::to_string)
    }

    /// Integer form of an option value (`Int`, or numeric `Text`).
    pub fn int(&self, long: &str) -> Option<i64> {
        self.get(long).and_then(OptionValue::as_int)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, OptionValue)> for ResolvedOptions {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        let mut options = ResolvedOptions::default();
        for (long, value) in iter {
            options.insert(&long, value);
        }
        options
    }
}

impl Serialize for ResolvedOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}
