//! Default values and fixed names for changed-files.
//!
//! This module provides centralized names used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Directory, relative to the workspace root, where the multi-repo tool
/// keeps its state.
pub const MBOX_DIR: &str = ".mbox";

/// Name of the feature configuration file inside [`MBOX_DIR`].
pub const MBOX_CONFIG_FILENAME: &str = "config.json";

/// Environment variable holding the source root for the `head` command.
pub const SRC_ROOT_ENV: &str = "SRCROOT";

/// Separator used when printing the changed files on a single line.
pub const OUTPUT_SEPARATOR: &str = ",";

/// Returns the location of the feature configuration for a workspace root.
pub fn mbox_config_path(root: &Path) -> PathBuf {
    root.join(MBOX_DIR).join(MBOX_CONFIG_FILENAME)
}
