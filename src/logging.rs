// src/logging.rs

//! Logging setup for `watchpath` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `WATCHPATH_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Diagnostics always go to stderr; stdout carries nothing but the
//! `event fired:` lines.

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV_VAR: &str = "WATCHPATH_LOG";

/// Install the global logging subscriber.
///
/// Call once at startup; a second call panics inside `init()`.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = cli_level
        .or_else(level_from_env)
        .map(LogLevel::as_tracing)
        .unwrap_or(tracing::Level::INFO);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn level_from_env() -> Option<LogLevel> {
    std::env::var(LOG_ENV_VAR).ok().and_then(|s| s.parse().ok())
}
