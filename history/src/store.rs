//! History file persistence.
//!
//! The file is plain text, one command per line. Loading drops blank lines
//! and reverses the on-disk order so the last line of the file comes first.
//! Saving writes the whole merged history in one replace, never appending.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::compress::HistoryPolicy;
use crate::error::{HistoryError, Result};

/// What [`HistoryFile::persist`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The session was empty; the file was not touched.
    Skipped,
    /// The merged history was written.
    Written { lines: usize },
}

/// A history file on disk.
///
/// # Examples
///
/// ```no_run
/// use command_less_history::{HistoryFile, HistoryPolicy};
///
/// let file = HistoryFile::new(".history");
/// let previous = file.load().unwrap();
/// println!("{} commands remembered", previous.len());
///
/// file.persist(&["ls".to_string()], &HistoryPolicy::default()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted history, most recent line first.
    ///
    /// A missing file yields an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](HistoryError::IoError) if the file exists but
    /// cannot be read.
    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            info!(
                path = %self.path.display(),
                "Failed to load history: file not found"
            );
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let mut lines: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        lines.reverse();

        debug!(path = %self.path.display(), entries = lines.len(), "Loaded history");
        Ok(lines)
    }

    /// Replaces the file with `lines`, newline-terminated.
    ///
    /// The content goes to a sibling temporary file first and is renamed
    /// over the history file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](HistoryError::IoError) on write or rename failure,
    /// or [`InvalidPath`](HistoryError::InvalidPath) if the path has no file
    /// name.
    pub fn save<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| HistoryError::InvalidPath(self.path.display().to_string()))?;

        let mut content = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");
        content.push('\n');

        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Merges `session` with the persisted history and writes the result.
    ///
    /// An empty session leaves the file untouched.
    pub fn persist<S: AsRef<str>>(
        &self,
        session: &[S],
        policy: &HistoryPolicy,
    ) -> Result<PersistOutcome> {
        if session.is_empty() {
            debug!(path = %self.path.display(), "No commands this session, history unchanged");
            return Ok(PersistOutcome::Skipped);
        }

        let persisted = self.load()?;
        debug!(
            session = session.len(),
            persisted = persisted.len(),
            "Merging history"
        );

        let merged = policy.merge(session, &persisted);
        debug!(entries = merged.len(), "Minified history");

        self.save(&merged)?;
        Ok(PersistOutcome::Written {
            lines: merged.len(),
        })
    }
}
