// src/watch/mod.rs

//! File watching and event filtering.
//!
//! This module is responsible for:
//! - Mapping CLI operation flags onto `notify` event kinds (`ops`).
//! - Opening the watch subscription on the target path and bridging the
//!   backend callback into an async channel (`watcher`).
//! - The debounced event loop that turns accepted notifications into
//!   `event fired:` lines (`filter`).
//!
//! It knows nothing about argument parsing or process exit; it only turns
//! filesystem notifications into printed lines.

pub mod filter;
pub mod ops;
pub mod watcher;

pub use filter::{DEBOUNCE_WINDOW, EventFilter};
pub use ops::{OperationKind, OperationSet};
pub use watcher::{WatchSession, open_watch_session};
