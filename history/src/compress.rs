//! History merging and compression.
//!
//! Session lines are placed before persisted lines, then consecutive repeats
//! are filtered. The filter compares each line with the last *kept* line and
//! forgets that marker after dropping a duplicate, so a run of `n` identical
//! lines keeps `ceil(n / 2)` of them:
//!
//! ```
//! use command_less_history::merge;
//!
//! let merged = merge(&["ls", "ls", "ls"], &[] as &[&str]);
//! assert_eq!(merged, vec!["ls", "ls"]);
//! ```

use std::collections::HashSet;

/// Concatenates `session` and `persisted`, then drops consecutive repeats.
pub fn merge<S: AsRef<str>, P: AsRef<str>>(session: &[S], persisted: &[P]) -> Vec<String> {
    compress_consecutive(concat(session, persisted))
}

/// Drops a line when it equals the last kept line. After a drop the marker
/// is cleared, so the next line is always kept.
pub fn compress_consecutive(lines: Vec<String>) -> Vec<String> {
    let mut last: Option<String> = None;
    let mut kept = Vec::with_capacity(lines.len());

    for line in lines {
        if last.as_deref() == Some(line.as_str()) {
            last = None;
            continue;
        }
        last = Some(line.clone());
        kept.push(line);
    }

    kept
}

/// Keeps only the first occurrence of every line.
pub fn dedup_all(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}

/// How session and persisted history are combined before saving.
///
/// # Examples
///
/// ```
/// use command_less_history::HistoryPolicy;
///
/// let policy = HistoryPolicy {
///     compress: true,
///     unique: true,
///     limit: Some(2),
/// };
/// let merged = policy.merge(&["pwd", "ls"], &["pwd", "cd", "ls"]);
/// assert_eq!(merged, vec!["pwd", "ls"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// Drop consecutive repeats (see [`compress_consecutive`]).
    pub compress: bool,
    /// Keep only the first occurrence of every line.
    pub unique: bool,
    /// Keep at most this many lines from the front of the merged list:
    /// session lines in entry order, then persisted lines most recent first.
    pub limit: Option<usize>,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            compress: true,
            unique: false,
            limit: None,
        }
    }
}

impl HistoryPolicy {
    /// Concatenates `session` and `persisted` and applies the policy.
    pub fn merge<S: AsRef<str>, P: AsRef<str>>(&self, session: &[S], persisted: &[P]) -> Vec<String> {
        let mut lines = concat(session, persisted);
        if self.compress {
            lines = compress_consecutive(lines);
        }
        if self.unique {
            lines = dedup_all(lines);
        }
        if let Some(limit) = self.limit {
            lines.truncate(limit);
        }
        lines
    }
}

fn concat<S: AsRef<str>, P: AsRef<str>>(session: &[S], persisted: &[P]) -> Vec<String> {
    session
        .iter()
        .map(|s| s.as_ref().to_string())
        .chain(persisted.iter().map(|p| p.as_ref().to_string()))
        .collect()
}
