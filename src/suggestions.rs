//! # Error Suggestions
//!
//! Helper functions that turn library errors into messages telling users
//! what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use changed_files::suggestions;
//!
//! let files = collector
//!     .collect_feature(&root)
//!     .map_err(|e| suggestions::explain(e, &root))?;
//! ```

use std::path::Path;

use crate::defaults::{mbox_config_path, SRC_ROOT_ENV};
use crate::error::Error;

/// Wrap a collection error with hints matching its cause.
pub fn explain(error: Error, root: &Path) -> anyhow::Error {
    let explained = match &error {
        Error::GitCommand { stderr, dir, .. } if stderr.contains("not a git repository") => {
            Some(not_a_git_repository(dir, &error))
        }
        Error::GitCommand { stderr, .. }
            if stderr.contains("unknown revision") || stderr.contains("bad revision") =>
        {
            Some(anyhow::anyhow!(
                "{error}\n\n\
                 hint: Check that the branches recorded in {config} exist locally\n\
                 hint: Fetch the target branch if it only exists on the remote",
                config = mbox_config_path(root).display()
            ))
        }
        Error::GitCommand { stderr, .. } if stderr.contains("No such file or directory") => {
            Some(anyhow::anyhow!(
                "{error}\n\n\
                 hint: Make sure the directory exists and git is installed and on PATH"
            ))
        }
        Error::FeatureNotFound { .. } | Error::ConfigParse { .. } | Error::Json(_) => {
            Some(anyhow::anyhow!(
                "{error}\n\n\
                 hint: {config} is written by the multi-repo tool; re-sync the workspace to regenerate it",
                config = mbox_config_path(root).display()
            ))
        }
        Error::Regex(_) => Some(invalid_match_pattern(&error)),
        _ => None,
    };

    explained.unwrap_or_else(|| anyhow::Error::new(error))
}

/// Generate an error for a directory that is not inside a git work tree.
pub fn not_a_git_repository(dir: &Path, error: &Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Not a git repository: {dir}\n\
         error: {error}\n\n\
         hint: Point {env} (head) or the ROOT argument (feature) at a git checkout\n\
         hint: For a multi-repo workspace, check that every repository listed in .mbox/config.json is cloned",
        dir = dir.display(),
        env = SRC_ROOT_ENV,
    )
}

/// Generate an error for an invalid `--match` expression.
pub fn invalid_match_pattern(error: &Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid --match pattern\n\
         error: {error}\n\n\
         hint: The pattern is a regular expression, e.g. '\\.m$' rather than '*.m'\n\
         hint: Test patterns at https://regex101.com (select Rust flavor)"
    )
}
