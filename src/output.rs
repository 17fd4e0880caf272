//! # Output Formatting
//!
//! Renders a [`ChangedFiles`] set for stdout. The default format is the
//! single comma-joined line consumed by build scripts; the others exist for
//! people reading the output and for tools that want structured data.

use clap::ValueEnum;

use crate::changes::ChangedFiles;
use crate::defaults::OUTPUT_SEPARATOR;
use crate::error::Result;

/// How the changed files are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// All paths on one line, separated by commas
    #[default]
    Comma,
    /// One path per line
    Lines,
    /// A JSON array of paths
    Json,
}

/// Render the files in `format`, without a trailing newline.
pub fn render(files: &ChangedFiles, format: OutputFormat) -> Result<String> {
    let paths: Vec<String> = files
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();

    Ok(match format {
        OutputFormat::Comma => paths.join(OUTPUT_SEPARATOR),
        OutputFormat::Lines => paths.join("\n"),
        OutputFormat::Json => serde_json::to_string(&paths)?,
    })
}
