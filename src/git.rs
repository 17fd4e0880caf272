//! # Git Diff Invocation
//!
//! Thin wrapper around `git diff --name-only`. The command always runs with
//! an explicit working directory, so listing several repositories never
//! touches the process's own current directory.
//!
//! Output is requested NUL-separated (`-z`) so that paths containing
//! newlines or characters git would otherwise quote come back verbatim.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// What a diff compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffRange {
    /// Working tree (including the index) against `HEAD`.
    Head,
    /// Changes on `current` since it diverged from `target`
    /// (`target...current`).
    Branches { target: String, current: String },
}

impl DiffRange {
    /// Builds the three-dot range between two branches.
    pub fn branches(target: impl Into<String>, current: impl Into<String>) -> Self {
        Self::Branches {
            target: target.into(),
            current: current.into(),
        }
    }

    /// The revision argument passed to `git diff`.
    pub fn rev_arg(&self) -> String {
        match self {
            Self::Head => "HEAD".to_string(),
            Self::Branches { target, current } => format!("{}...{}", target, current),
        }
    }
}

impl fmt::Display for DiffRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rev_arg())
    }
}

/// List the files changed in `range` for the repository at `dir`.
///
/// Returned paths are relative, exactly as git reports them.
pub fn diff_name_only(dir: &Path, range: &DiffRange) -> Result<Vec<PathBuf>> {
    let rev = range.rev_arg();
    let command = format!("git diff --name-only -z {}", rev);
    debug!("Running `{}` in {}", command, dir.display());

    let output = Command::new("git")
        .args(["diff", "--name-only", "-z", rev.as_str(), "--"])
        .current_dir(dir)
        .output()
        .map_err(|e| Error::GitCommand {
            command: command.clone(),
            dir: dir.to_path_buf(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitCommand {
            command,
            dir: dir.to_path_buf(),
            stderr: stderr.trim().to_string(),
        });
    }

    let files = parse_name_only(&output.stdout);
    debug!("`{}` reported {} file(s)", command, files.len());
    Ok(files)
}

/// Parse the NUL-separated output of `git diff --name-only -z`.
pub fn parse_name_only(stdout: &[u8]) -> Vec<PathBuf> {
    stdout
        .split(|b| *b == b'\0')
        .filter(|entry| !entry.is_empty())
        .map(|entry| PathBuf::from(String::from_utf8_lossy(entry).into_owned()))
        .collect()
}
