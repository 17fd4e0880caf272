//! # Diff Operations
//!
//! The collector never calls git directly. It goes through the
//! `DiffOperations` trait, whose default implementation wraps the `git`
//! command in [`crate::git`]. Tests substitute an in-memory implementation
//! to simulate repositories, branch divergence and git failures without
//! creating real repositories.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::git::DiffRange;

/// Trait for listing changed files - allows mocking in tests
pub trait DiffOperations {
    /// Lists the files changed in `range` for the repository at `repo_dir`.
    ///
    /// Paths are relative to `repo_dir`, in the order git reports them.
    fn changed_files(&self, repo_dir: &Path, range: &DiffRange) -> Result<Vec<PathBuf>>;
}

/// The default implementation of `DiffOperations`, which uses the system's
/// `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDiffOperations;

impl DiffOperations for DefaultDiffOperations {
    fn changed_files(&self, repo_dir: &Path, range: &DiffRange) -> Result<Vec<PathBuf>> {
        crate::git::diff_name_only(repo_dir, range)
    }
}
