// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::errors::{Result, WatchpathError};
use crate::watch::OperationSet;

/// Command-line arguments for `watchpath`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchpath",
    version,
    about = "Watch a single path and print the filesystem events you asked for.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the file or directory to watch.
    #[arg(long, value_name = "PATH", default_value = "")]
    pub path: String,

    /// Report writes (content modifications).
    #[arg(long)]
    pub write: bool,

    /// Report newly created entries.
    #[arg(long)]
    pub create: bool,

    /// Report metadata/permission changes.
    #[arg(long)]
    pub chmod: bool,

    /// Report removals.
    #[arg(long)]
    pub remove: bool,

    /// Report renames.
    #[arg(long)]
    pub rename: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHPATH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Check the parsed arguments for the fatal misconfigurations that should
/// stop the tool before it touches the filesystem.
pub fn validate(args: &CliArgs) -> Result<()> {
    if args.path.is_empty() {
        return Err(WatchpathError::PathRequired);
    }
    if OperationSet::from_args(args).is_empty() {
        return Err(WatchpathError::NoOperationsSelected);
    }
    Ok(())
}
