// src/watch/filter.rs

//! The debounced event loop.
//!
//! Responsibilities:
//! - Consume the raw notification stream produced by the watch session.
//! - Check each notification against the enabled operation kinds.
//! - Suppress notifications that land inside the debounce window.
//! - Write one `event fired: <name>` line per accepted notification.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::Event;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::errors::{Result, WatchpathError};
use crate::watch::ops::{OperationKind, OperationSet};

/// Minimum time that must have passed since the last accepted notification
/// before another one is accepted.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_secs(1);

/// Enabled operations plus the debounce clock.
///
/// The clock starts unset so that the first matching notification is always
/// accepted; it advances only when a notification is accepted.
#[derive(Debug)]
pub struct EventFilter {
    ops: OperationSet,
    last_accepted: Option<Instant>,
}

impl EventFilter {
    pub fn new(ops: OperationSet) -> Self {
        Self {
            ops,
            last_accepted: None,
        }
    }

    /// Consume the notification stream until it yields an error or closes.
    ///
    /// Accepted notifications are written to `out` as `event fired: <name>`
    /// lines, flushed per notification. An `Err` value on the stream is fatal
    /// and surfaces as [`WatchpathError::WatchStream`].
    pub async fn run<W: Write>(
        mut self,
        mut events: UnboundedReceiver<notify::Result<Event>>,
        mut out: W,
    ) -> Result<()> {
        info!("event loop started");

        while let Some(res) = events.recv().await {
            let event = res.map_err(WatchpathError::WatchStream)?;
            debug!(?event, "received notify event");

            let accepted = self.apply(&event, Instant::now());
            if accepted.is_empty() {
                continue;
            }
            for path in accepted {
                writeln!(out, "event fired: {}", path.display())?;
            }
            out.flush()?;
        }

        debug!("notification stream closed, event loop ended");
        Ok(())
    }

    /// One step of the loop: check `event` against every enabled operation
    /// kind at time `now` and return the names to print.
    ///
    /// The debounce gate is re-read per kind, so an acceptance also
    /// suppresses any later kind matched by the same notification. An
    /// acceptance advances the clock even when the notification carries no
    /// path (no line is printed for it then).
    pub fn apply(&mut self, event: &Event, now: Instant) -> Vec<PathBuf> {
        let mut accepted = Vec::new();

        for op in OperationKind::ALL {
            if !self.ops.contains(op) || !op.matches(&event.kind) {
                continue;
            }
            if !self.window_open(now) {
                debug!(op = %op, paths = ?event.paths, "notification suppressed by debounce window");
                continue;
            }
            self.last_accepted = Some(now);
            match event.paths.first() {
                Some(path) => accepted.push(path.clone()),
                None => debug!(op = %op, "accepted notification carries no path"),
            }
        }

        accepted
    }

    fn window_open(&self, now: Instant) -> bool {
        match self.last_accepted {
            None => true,
            Some(last) => now.duration_since(last) >= DEBOUNCE_WINDOW,
        }
    }
}
