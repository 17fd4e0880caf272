//! # Error Handling
//!
//! This module defines the centralized error type for the `changed-files`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers every anticipated failure mode, with enough context to tell the
//! user which repository, file, or git command was involved.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur while collecting changed files.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! The failure scenarios covered are:
//!
//! - Feature configuration parsing errors.
//! - A missing entry for the active feature.
//! - Git command execution failures.
//! - Invalid file filter patterns.
//! - I/O and JSON errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for changed-files operations
#[derive(Error, Debug)]
pub enum Error {
    /// The feature configuration file could not be interpreted.
    ///
    /// Includes the file that was being read and optionally a hint about
    /// how to fix it.
    #[error("Configuration parsing error in {}: {message}{}", path.display(), hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        path: PathBuf,
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The feature named by `current_feature_name` has no entry in `features`.
    #[error("Feature '{name}' not found in configuration (available: {available})")]
    FeatureNotFound { name: String, available: String },

    /// A git command failed to start or exited unsuccessfully.
    #[error("Git command failed in {}: {command} - {stderr}", dir.display())]
    GitCommand {
        command: String,
        dir: PathBuf,
        stderr: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
