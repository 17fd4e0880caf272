//! # Feature Configuration
//!
//! This module defines the data structures that mirror the `.mbox/config.json`
//! file written by the multi-repo feature-branch tool, together with the
//! logic for loading it and resolving which branches each repository should
//! be compared on.
//!
//! The file is owned by that external tool. It is only ever read here, and
//! keys this tool does not use are ignored.
//!
//! ## Branch resolution
//!
//! While a named feature is active, every repository compares its
//! `target_branch` with the feature branch `branch_prefix + name`. When the
//! current feature name is empty (no feature active), both sides collapse to
//! the repository's `last_branch`. That diff reports nothing, but it still
//! fails when the branch does not exist.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::defaults::mbox_config_path;
use crate::error::{Error, Result};

/// One repository taking part in a feature
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoEntry {
    /// Repository name, which is also its directory under the workspace root.
    pub name: String,
    /// Branch the repository was on when the feature was last switched.
    pub last_branch: String,
    /// Branch the feature branch will be merged into.
    #[serde(default)]
    pub target_branch: Option<String>,
}

/// A named unit of work spanning several repositories
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub branch_prefix: String,
    /// Repositories in the order they should be diffed.
    #[serde(default)]
    pub repos: Vec<RepoEntry>,
}

/// Top level of `.mbox/config.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MboxConfig {
    pub current_feature_name: String,
    pub features: BTreeMap<String, Feature>,
}

/// The two sides of a repository's branch comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoBranches {
    pub target: String,
    pub current: String,
}

impl MboxConfig {
    /// Whether no named feature is active.
    pub fn is_free_mode(&self) -> bool {
        self.current_feature_name.is_empty()
    }

    /// Returns the feature named by `current_feature_name`.
    pub fn current_feature(&self) -> Result<&Feature> {
        self.features
            .get(&self.current_feature_name)
            .ok_or_else(|| Error::FeatureNotFound {
                name: self.current_feature_name.clone(),
                available: self
                    .features
                    .keys()
                    .map(|k| format!("'{}'", k))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Resolve the target and current branch of a repository in the
    /// active feature.
    pub fn branches_for(&self, feature: &Feature, repo: &RepoEntry) -> Result<RepoBranches> {
        if self.is_free_mode() {
            return Ok(RepoBranches {
                target: repo.last_branch.clone(),
                current: repo.last_branch.clone(),
            });
        }

        let target = repo
            .target_branch
            .clone()
            .ok_or_else(|| Error::ConfigParse {
                path: PathBuf::from(crate::defaults::MBOX_CONFIG_FILENAME),
                message: format!(
                    "repository '{}' in feature '{}' has no target_branch",
                    repo.name, self.current_feature_name
                ),
                hint: Some("Re-run the feature switch so the target branch is recorded".to_string()),
            })?;

        Ok(RepoBranches {
            target,
            current: format!("{}{}", feature.branch_prefix, feature.name),
        })
    }
}

/// Parse a feature configuration from its JSON text.
pub fn parse(json_content: &str) -> Result<MboxConfig> {
    Ok(serde_json::from_str(json_content)?)
}

/// Read and parse a feature configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MboxConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
        hint: None,
    })
}

/// Load the feature configuration of a workspace root, if it has one.
pub fn load(root: &Path) -> Result<Option<MboxConfig>> {
    let path = mbox_config_path(root);
    if !path.is_file() {
        info!("No feature configuration at {}", path.display());
        return Ok(None);
    }

    let config = from_file(&path)?;
    info!(
        "Loaded feature configuration from {} (current feature: '{}')",
        path.display(),
        config.current_feature_name
    );
    Ok(Some(config))
}
