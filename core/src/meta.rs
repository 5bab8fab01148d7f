use std::path::Path;

use serde::{Deserialize, Serialize};

/// Version reported when the program does not declare one.
pub const DEFAULT_VERSION: &str = "1.0";

/// Program metadata used in help and man output.
///
/// # Examples
///
/// ```
/// use command_less_core::ProgramMeta;
///
/// let meta = ProgramMeta::new("lil-repl", "0.1.0")
///     .with_description("A small shell. Keeps history.")
///     .with_author("someone");
///
/// assert_eq!(meta.short_description(), "A small shell.");
/// assert_eq!(meta.author_or_na(), "someone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMeta {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl ProgramMeta {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: None,
            author: None,
        }
    }

    /// Metadata derived from the running executable: the basename of
    /// `argv[0]` and [`DEFAULT_VERSION`].
    pub fn from_env() -> Self {
        let name = std::env::args_os()
            .next()
            .as_deref()
            .and_then(|argv0| Path::new(argv0).file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(&name, DEFAULT_VERSION)
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the author. Empty strings are ignored.
    pub fn with_author(mut self, author: &str) -> Self {
        if !author.trim().is_empty() {
            self.author = Some(author.to_string());
        }
        self
    }

    /// Description up to and including the first `.`, or the whole
    /// description when it has none. Empty when no description is set.
    pub fn short_description(&self) -> &str {
        let Some(description) = self.description.as_deref() else {
            return "";
        };
        match description.find('.') {
            Some(idx) => &description[..=idx],
            None => description,
        }
    }

    /// Author, or `N/A` when unspecified.
    pub fn author_or_na(&self) -> &str {
        self.author.as_deref().unwrap_or("N/A")
    }
}
