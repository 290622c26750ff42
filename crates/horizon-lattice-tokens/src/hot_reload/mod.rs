//! Hot-reload support for token files.
//!
//! This module is only available with the `hot-reload` feature.

mod watcher;

pub use watcher::{ChangeKind, TokenFileChangeEvent, TokenWatcher};
