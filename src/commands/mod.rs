//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `changed-files` command-line tool, one file per command.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic, calling into the `changed_files` library.
//!
//! Options shared by every command (filtering, extra files and output
//! format) live in [`ListArgs`] and are flattened into each command.

pub mod feature;
pub mod head;

use anyhow::Result;
use clap::Args;
use std::path::Path;

use changed_files::changes::ChangedFiles;
use changed_files::filter::{extra_paths, FileFilter};
use changed_files::output::{render, OutputFormat};
use changed_files::suggestions;

/// Options controlling which collected files are printed, and how
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only print files whose path matches this regular expression.
    #[arg(short = 'm', long = "match", value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Additional files to include, separated by commas.
    ///
    /// Relative paths are resolved against the root. May be repeated.
    #[arg(long, value_name = "PATHS")]
    pub extra_files: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "comma")]
    pub format: OutputFormat,
}

impl ListArgs {
    /// Apply extra files and the filter, then render for stdout.
    pub fn finish(&self, root: &Path, mut files: ChangedFiles) -> Result<String> {
        files.extend(extra_paths(root, &self.extra_files));

        if let Some(pattern) = &self.pattern {
            let filter = FileFilter::new(pattern)
                .map_err(|e| suggestions::invalid_match_pattern(&e))?;
            filter.apply(&mut files);
        }

        Ok(render(&files, self.format)?)
    }
}
