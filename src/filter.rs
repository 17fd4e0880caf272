//! # File Filtering
//!
//! Post-collection adjustments to a [`ChangedFiles`] set: keeping only paths
//! that match a regular expression, and adding extra paths supplied on the
//! command line.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::changes::ChangedFiles;
use crate::error::Result;

/// Keeps the paths whose string form matches a regular expression.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pattern: Regex,
}

impl FileFilter {
    /// Compiles `pattern`. The match is an unanchored search.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.pattern.is_match(&path.to_string_lossy())
    }

    /// Drops every path that does not match, keeping the order of the rest.
    pub fn apply(&self, files: &mut ChangedFiles) {
        files.retain(|path| self.matches(path));
    }
}

/// Split comma-separated path lists into individual paths, resolving
/// relative ones against `root`.
pub fn extra_paths<S: AsRef<str>>(root: &Path, lists: &[S]) -> Vec<PathBuf> {
    lists
        .iter()
        .flat_map(|list| list.as_ref().split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| root.join(entry))
        .collect()
}
