// src/lib.rs

pub mod cli;
pub mod errors;
pub mod logging;
pub mod watch;

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::errors::{Result, WatchpathError};
use crate::watch::{EventFilter, OperationSet, open_watch_session};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - argument validation
/// - the path existence check
/// - the watch session
/// - the debounced event loop (runs until the stream errors or closes)
pub async fn run(args: CliArgs) -> Result<()> {
    cli::validate(&args)?;

    let path = Path::new(&args.path);
    ensure_path_exists(path)?;

    let ops = OperationSet::from_args(&args);
    debug!(?ops, "enabled operations");

    let (_session, events) = open_watch_session(path)?;

    EventFilter::new(ops).run(events, io::stdout()).await
}

/// Stat the path before watching, so a bad path fails with a clear message
/// instead of a watcher registration error.
fn ensure_path_exists(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(WatchpathError::PathNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(WatchpathError::PathAccess {
            path: path.to_path_buf(),
            source,
        }),
    }
}
