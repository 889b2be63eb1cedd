// src/errors.rs

//! Crate-wide error type.
//!
//! Every failure in `watchpath` is fatal: errors bubble up to `main`, get
//! printed once, and the process exits non-zero. There is no retry or
//! degraded-mode behaviour anywhere, so the variants here describe the
//! startup checks and the two ways a live watch can go wrong.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchpathError {
    #[error("path is required")]
    PathRequired,

    #[error("at least one of --write, --create, --chmod, --remove, --rename must be set")]
    NoOperationsSelected,

    #[error("path does not exist: {path:?}")]
    PathNotFound { path: PathBuf },

    #[error("error accessing path {path:?}: {source}")]
    PathAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error creating filesystem watcher: {0}")]
    CreateWatcher(#[source] notify::Error),

    #[error("error watching path {path:?}: {source}")]
    WatchPath {
        path: PathBuf,
        source: notify::Error,
    },

    /// The backend reported an error on an already-established watch.
    #[error("filesystem watch error: {0}")]
    WatchStream(#[source] notify::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WatchpathError>;
