//! # Feature Command Implementation
//!
//! This module implements the `feature` subcommand, which lists the files
//! changed across every repository of the workspace's active feature.
//!
//! ## Functionality
//!
//! - **Feature Workspaces**: Reads `<ROOT>/.mbox/config.json` and, for each
//!   repository of the current feature, collects the files changed on the
//!   feature branch since it left its target branch plus any uncommitted
//!   changes.
//! - **Plain Repositories**: Without a feature configuration, behaves like
//!   `head` rooted at `<ROOT>`.
//!
//! This command is a read-only operation; it never switches branches or
//! writes the configuration.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use changed_files::collector::{absolute_root, ChangeCollector};
use changed_files::suggestions;

use super::ListArgs;

/// List files changed across the repositories of the active feature
#[derive(Args, Debug)]
pub struct FeatureArgs {
    /// Workspace root containing `.mbox/config.json`, or a plain repository.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    #[command(flatten)]
    pub list: ListArgs,
}

/// Execute the `feature` command.
pub fn execute(args: FeatureArgs) -> Result<()> {
    let root = absolute_root(&args.root)?;

    let files = ChangeCollector::new()
        .collect_feature(&root)
        .map_err(|e| suggestions::explain(e, &root))?;

    println!("{}", args.list.finish(&root, files)?);
    Ok(())
}
