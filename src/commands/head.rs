//! # Head Command Implementation
//!
//! This module implements the `head` subcommand, which lists the files that
//! differ between the working tree and HEAD in a single repository. The
//! repository root usually comes from the `SRCROOT` environment variable
//! that build systems export to script phases.
//!
//! Git runs with the root as its working directory; the process's own
//! current directory is left untouched.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use changed_files::collector::{absolute_root, ChangeCollector};
use changed_files::defaults::SRC_ROOT_ENV;
use changed_files::suggestions;

use super::ListArgs;

/// List files differing from HEAD in the repository at $SRCROOT
#[derive(Args, Debug)]
pub struct HeadArgs {
    /// Root directory of the repository.
    ///
    /// Read from the `SRCROOT` environment variable when not given.
    #[arg(long, value_name = "DIR", env = SRC_ROOT_ENV)]
    pub src_root: PathBuf,

    #[command(flatten)]
    pub list: ListArgs,
}

/// Execute the `head` command.
pub fn execute(args: HeadArgs) -> Result<()> {
    let root = absolute_root(&args.src_root)?;

    let files = ChangeCollector::new()
        .collect_head(&root)
        .map_err(|e| suggestions::explain(e, &root))?;

    println!("{}", args.list.finish(&root, files)?);
    Ok(())
}
