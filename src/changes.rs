//! # Changed File Set
//!
//! `ChangedFiles` accumulates the paths reported by successive diffs. It is
//! an insertion-ordered set: a path keeps the position at which it was
//! first seen, and inserting it again is a no-op. Membership is checked
//! through a `HashSet`, so collecting many diffs stays linear in the number
//! of reported paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Insertion-ordered, duplicate-free collection of file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFiles {
    order: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl ChangedFiles {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path, returning `false` if it was already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.order.push(path);
        true
    }

    /// Keeps only the paths for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Path) -> bool,
    {
        let seen = &mut self.seen;
        self.order.retain(|path| {
            let kept = keep(path.as_path());
            if !kept {
                seen.remove(path);
            }
            kept
        });
    }

    /// Iterates over the paths in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Extend<PathBuf> for ChangedFiles {
    fn extend<I: IntoIterator<Item = PathBuf>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path);
        }
    }
}

impl FromIterator<PathBuf> for ChangedFiles {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut files = Self::new();
        files.extend(iter);
        files
    }
}

impl<'a> IntoIterator for &'a ChangedFiles {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
