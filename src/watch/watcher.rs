// src/watch/watcher.rs

//! Wiring for the cross-platform filesystem watcher (`notify` crate).

use std::path::Path;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

use crate::errors::{Result, WatchpathError};

/// Handle for the filesystem watch subscription.
///
/// Keeps the underlying `RecommendedWatcher` alive while the notification
/// stream is consumed. Dropping the handle cancels the subscription and
/// closes the stream.
pub struct WatchSession {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSession").finish()
    }
}

/// Open a non-recursive watch on the single given path.
///
/// Everything the backend produces, notifications and errors alike, is
/// forwarded in arrival order into the returned channel; the consumer
/// decides what is fatal.
pub fn open_watch_session(
    path: &Path,
) -> Result<(WatchSession, UnboundedReceiver<notify::Result<Event>>)> {
    let (event_tx, event_rx) = mpsc::unbounded_channel::<notify::Result<Event>>();

    // Called synchronously on notify's backend thread for every event.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            // A send error means the receiver is gone and the process is
            // already on its way out; the value has nowhere to go.
            let _ = event_tx.send(res);
        },
        Config::default(),
    )
    .map_err(WatchpathError::CreateWatcher)?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .map_err(|source| WatchpathError::WatchPath {
            path: path.to_path_buf(),
            source,
        })?;

    info!("file watcher started on {:?}", path);

    Ok((WatchSession { _inner: watcher }, event_rx))
}
