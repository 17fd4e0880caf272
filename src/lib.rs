//! # Changed Files Library
//!
//! This library computes the set of files changed in a git repository, or
//! across all repositories taking part in a multi-repo feature. It is used
//! by the `changed-files` command-line tool but can be embedded in other
//! build tooling that needs the same list.
//!
//! ## Quick Example
//!
//! ```
//! use changed_files::changes::ChangedFiles;
//! use changed_files::output::{render, OutputFormat};
//! use std::path::PathBuf;
//!
//! let mut files = ChangedFiles::new();
//! files.insert(PathBuf::from("/work/app/a.m"));
//! files.insert(PathBuf::from("/work/app/b.m"));
//! files.insert(PathBuf::from("/work/app/a.m"));
//!
//! assert_eq!(files.len(), 2);
//! assert_eq!(render(&files, OutputFormat::Comma).unwrap(), "/work/app/a.m,/work/app/b.m");
//! ```
//!
//! ## Core Concepts
//!
//! - **Feature configuration (`config`)**: Reads `.mbox/config.json`, the
//!   state file of the multi-repo feature-branch tool, and resolves the
//!   branches each repository is compared on.
//! - **Diffing (`git`, `repository`)**: Runs `git diff --name-only` in an
//!   explicit directory, behind the mockable `DiffOperations` trait.
//! - **Collection (`collector`, `changes`)**: Runs the diffs in order and
//!   accumulates absolute paths into an insertion-ordered set.
//! - **Presentation (`filter`, `output`)**: Narrows the set and renders it.
//!
//! ## Execution Flow
//!
//! 1.  **Load**: Look for `.mbox/config.json` under the root.
//! 2.  **Diff**: For each repository of the active feature, diff the
//!     target branch against the feature branch, then the working tree
//!     against HEAD. Without a configuration, diff the root against HEAD.
//! 3.  **Aggregate**: Join each path onto its repository directory and drop
//!     duplicates, keeping the first occurrence.
//! 4.  **Print**: Filter and render the result on stdout.

pub mod changes;
pub mod collector;
pub mod config;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod git;
pub mod output;
pub mod repository;
pub mod suggestions;

#[cfg(test)]
mod changes_proptest;
