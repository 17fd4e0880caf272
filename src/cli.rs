//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::commands;

/// Changed Files - List files changed in a repository or a multi-repo feature
#[derive(Parser, Debug)]
#[command(name = "changed-files")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level; logs go to stderr. RUST_LOG takes precedence.
    #[arg(long, global = true, value_name = "LEVEL", value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List files differing from HEAD in the repository at $SRCROOT
    Head(commands::head::HeadArgs),

    /// List files changed across the repositories of the active feature
    Feature(commands::feature::FeatureArgs),
}

/// Log verbosity accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);

        match self.command {
            Commands::Head(args) => commands::head::execute(args),
            Commands::Feature(args) => commands::feature::execute(args),
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(level: LogLevel) -> &'static str {
    LevelFilter::from(level).as_str()
}

fn init_logging(level: LogLevel) {
    let env = env_logger::Env::default().default_filter_or(default_filter(level));
    // Ignore the error if a logger is already installed
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
