//! Shared test utilities for E2E tests.
//!
//! This module provides a fixture that builds real git repositories and
//! multi-repo feature workspaces in a temporary directory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.init_repo("app", &[("a.txt", "one\n")]);
//!     fixture.write("app/a.txt", "two\n");
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Feature configuration snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Active feature `login` spanning `app` and `core`, both targeting `main`.
    pub const LOGIN_FEATURE: &str = r#"{
    "current_feature_name": "login",
    "features": {
        "": {
            "name": "",
            "branch_prefix": "",
            "repos": [
                {"name": "app", "last_branch": "main"},
                {"name": "core", "last_branch": "main"}
            ]
        },
        "login": {
            "name": "login",
            "branch_prefix": "feature/",
            "repos": [
                {"name": "app", "last_branch": "main", "target_branch": "main"},
                {"name": "core", "last_branch": "main", "target_branch": "main"}
            ]
        }
    }
}"#;

    /// No feature active; `app` and `core` are tracked on `main`.
    pub const FREE_MODE: &str = r#"{
    "current_feature_name": "",
    "features": {
        "": {
            "name": "",
            "branch_prefix": "feature/",
            "repos": [
                {"name": "app", "last_branch": "main"},
                {"name": "core", "last_branch": "main"}
            ]
        }
    }
}"#;

    /// Current feature name with no matching entry.
    pub const MISSING_FEATURE: &str = r#"{
    "current_feature_name": "search",
    "features": {}
}"#;
}

/// A temporary directory holding git repositories and an optional
/// `.mbox/config.json`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file or directory inside the fixture.
    pub fn abs(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Write a file, creating parent directories as needed.
    pub fn write(&self, relative: &str, content: &str) {
        self.temp_dir
            .child(relative)
            .write_str(content)
            .expect("Failed to write file");
    }

    /// Run git in a directory of the fixture ("" for the root).
    pub fn git(&self, relative: &str, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.abs(relative))
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Initialize a git repository on `main` with the given files committed.
    pub fn init_repo(&self, relative: &str, files: &[(&str, &str)]) {
        std::fs::create_dir_all(self.abs(relative)).expect("Failed to create repo dir");

        self.git(relative, &["init", "-b", "main"]);
        self.git(relative, &["config", "user.email", "test@example.com"]);
        self.git(relative, &["config", "user.name", "Test User"]);
        // Disable commit signing for tests
        self.git(relative, &["config", "commit.gpgsign", "false"]);

        for (path, content) in files {
            self.write(&join(relative, path), content);
        }
        self.commit_all(relative, "Initial commit");
    }

    /// Stage and commit everything in a repository.
    pub fn commit_all(&self, relative: &str, message: &str) {
        self.git(relative, &["add", "."]);
        self.git(relative, &["commit", "-m", message]);
    }

    /// Create and switch to a branch in a repository.
    pub fn checkout_new_branch(&self, relative: &str, branch: &str) {
        self.git(relative, &["checkout", "-b", branch]);
    }

    /// Write `.mbox/config.json` at the fixture root.
    pub fn with_mbox_config(self, json: &str) -> Self {
        self.write(".mbox/config.json", json);
        self
    }

    /// Create a command for the changed-files binary run from the fixture root.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("changed-files");
        cmd.current_dir(self.path());
        cmd.env_remove("SRCROOT");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Comma-joined absolute paths, as the default output prints them.
    pub fn expected_line(&self, relatives: &[&str]) -> String {
        let paths: Vec<String> = relatives
            .iter()
            .map(|r| self.abs(r).display().to_string())
            .collect();
        format!("{}\n", paths.join(","))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn join(dir: &str, path: &str) -> String {
    if dir.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", dir, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_init_repo() {
        let fixture = TestFixture::new();
        fixture.init_repo("app", &[("src/a.txt", "a\n")]);
        assert!(fixture.abs("app/.git").exists());
        assert!(fixture.abs("app/src/a.txt").exists());
    }

    #[test]
    fn test_configs_are_valid_json() {
        for config in [
            configs::LOGIN_FEATURE,
            configs::FREE_MODE,
            configs::MISSING_FEATURE,
        ] {
            serde_json::from_str::<serde_json::Value>(config).expect("Config should be valid JSON");
        }
    }
}
