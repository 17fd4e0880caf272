//! # Changed File Collection
//!
//! `ChangeCollector` drives the diffs behind both commands and accumulates
//! their results into one [`ChangedFiles`] set.
//!
//! - **Single repository**: one working-tree-vs-HEAD diff at the root.
//! - **Feature workspace**: for each repository of the active feature, in
//!   configuration order, the branch-range diff followed by the HEAD diff.
//!   A workspace without `.mbox/config.json` falls back to the single
//!   repository behavior.
//!
//! Every reported path is joined onto the directory of the repository it
//! came from, so the result only contains absolute paths.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::changes::ChangedFiles;
use crate::config::{self, MboxConfig};
use crate::error::Result;
use crate::git::DiffRange;
use crate::repository::{DefaultDiffOperations, DiffOperations};

/// Collects changed files through a pluggable [`DiffOperations`].
pub struct ChangeCollector {
    diff_ops: Box<dyn DiffOperations>,
}

impl Default for ChangeCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeCollector {
    /// Creates a collector that shells out to `git`.
    pub fn new() -> Self {
        Self {
            diff_ops: Box::new(DefaultDiffOperations),
        }
    }

    /// Creates a collector with a custom `DiffOperations` implementation.
    ///
    /// This is primarily used for testing to inject mock operations.
    #[cfg(test)]
    pub fn with_operations(diff_ops: Box<dyn DiffOperations>) -> Self {
        Self { diff_ops }
    }

    /// Files differing between the working tree and HEAD at `root`.
    pub fn collect_head(&self, root: &Path) -> Result<ChangedFiles> {
        let root = absolute_root(root)?;
        let mut files = ChangedFiles::new();
        self.collect_into(&mut files, &root, &DiffRange::Head)?;
        Ok(files)
    }

    /// Files changed across the active feature of the workspace at `root`.
    pub fn collect_feature(&self, root: &Path) -> Result<ChangedFiles> {
        let root = absolute_root(root)?;
        match config::load(&root)? {
            Some(config) => self.collect_repos(&root, &config),
            None => self.collect_head(&root),
        }
    }

    /// Files changed in every repository of the configuration's active feature.
    pub fn collect_repos(&self, root: &Path, config: &MboxConfig) -> Result<ChangedFiles> {
        let feature = config.current_feature()?;
        if feature.repos.is_empty() {
            warn!(
                "Feature '{}' lists no repositories",
                config.current_feature_name
            );
        }

        let mut files = ChangedFiles::new();
        for repo in &feature.repos {
            let repo_dir = root.join(&repo.name);
            let branches = config.branches_for(feature, repo)?;
            let range = DiffRange::branches(branches.target, branches.current);
            debug!("Collecting {} ({}, then HEAD)", repo.name, range);

            // Still run for X...X: git rejects a missing branch
            self.collect_into(&mut files, &repo_dir, &range)?;
            self.collect_into(&mut files, &repo_dir, &DiffRange::Head)?;
        }

        Ok(files)
    }

    fn collect_into(&self, files: &mut ChangedFiles, dir: &Path, range: &DiffRange) -> Result<()> {
        let changed = self.diff_ops.changed_files(dir, range)?;
        files.extend(changed.into_iter().map(|relative| dir.join(relative)));
        Ok(())
    }
}

/// Make `root` absolute against the current directory without resolving
/// symlinks.
pub fn absolute_root(root: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(root)?)
}
