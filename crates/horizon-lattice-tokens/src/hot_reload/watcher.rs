//! File watching for token hot-reload.

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebouncedEventKind, Debouncer, new_debouncer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::theme::ThemeSet;
use crate::types::TokenFormat;
use crate::{Error, Result};

/// Event indicating a token file changed.
#[derive(Debug, Clone)]
pub struct TokenFileChangeEvent {
    /// Path to the changed file.
    pub path: PathBuf,
    /// Type of change.
    pub kind: ChangeKind,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was modified or created.
    Modified,
    /// File was removed.
    Removed,
}

/// Watches theme token files for changes.
///
/// Only `.json` and `.toml` files are reported. Files can be watched one by
/// one, or through their directory so that newly added themes show up too.
///
/// # Example
///
/// ```ignore
/// let mut themes = ThemeSet::from_dir("tokens/themes")?;
/// let mut watcher = TokenWatcher::new()?;
/// watcher.watch_themes(&themes)?;
///
/// // In your event loop:
/// let changes = watcher.poll();
/// if !changes.is_empty() {
///     watcher.apply_changes(&mut themes, &changes);
///     let semantic = engine.aggregate(&themes);
/// }
/// ```
pub struct TokenWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    watched_paths: HashSet<PathBuf>,
    watched_dirs: HashSet<PathBuf>,
}

impl TokenWatcher {
    /// Create a new token watcher.
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer = new_debouncer(Duration::from_millis(100), tx)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched_paths: HashSet::new(),
            watched_dirs: HashSet::new(),
        })
    }

    /// Start watching a token file.
    ///
    /// Fails for files that are not `.json` or `.toml`.
    pub fn watch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        if TokenFormat::from_path(path.as_ref()).is_none() {
            return Err(Error::unsupported_format(path.as_ref()));
        }
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(path.as_ref(), e))?;

        if !self.watched_paths.contains(&path) {
            self.debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;

            self.watched_paths.insert(path.clone());
            tracing::info!("Watching token file: {}", path.display());
        }

        Ok(())
    }

    /// Start watching a theme directory.
    ///
    /// Token files created in the directory later are reported as modified,
    /// so [`apply_changes`](Self::apply_changes) loads them as new themes.
    pub fn watch_dir(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(dir.as_ref(), e))?;

        if !self.watched_dirs.contains(&dir) {
            self.debouncer
                .watcher()
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;

            self.watched_dirs.insert(dir.clone());
            tracing::info!("Watching theme directory: {}", dir.display());
        }

        Ok(())
    }

    /// Watch the source file of every theme loaded from disk.
    pub fn watch_themes(&mut self, themes: &ThemeSet) -> Result<()> {
        for name in themes.names() {
            if let Some(path) = themes.source_path(name) {
                self.watch(path)?;
            }
        }
        Ok(())
    }

    /// Stop watching a token file.
    pub fn unwatch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = match path.as_ref().canonicalize() {
            Ok(p) => p,
            Err(_) => return Ok(()),
        };

        if self.watched_paths.remove(&path) || self.watched_dirs.remove(&path) {
            let _ = self.debouncer.watcher().unwatch(&path);
            tracing::info!("Stopped watching: {}", path.display());
        }

        Ok(())
    }

    /// Poll for token file changes.
    ///
    /// Returns one event per changed file. Call this in your event loop.
    pub fn poll(&mut self) -> Vec<TokenFileChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind != DebouncedEventKind::Any || !self.is_watched(&event.path) {
                            continue;
                        }

                        let kind = if event.path.exists() {
                            ChangeKind::Modified
                        } else {
                            ChangeKind::Removed
                        };
                        changes.push(TokenFileChangeEvent {
                            path: event.path,
                            kind,
                        });
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!("File watcher error: {}", e);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("File watcher disconnected");
                    break;
                }
            }
        }

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);

        changes
    }

    /// Apply changes to a theme set.
    ///
    /// Modified files are reloaded and removed files drop their theme. A file
    /// that fails to parse keeps the previously loaded tokens. Returns the
    /// names of the themes that changed.
    pub fn apply_changes(&self, themes: &mut ThemeSet, changes: &[TokenFileChangeEvent]) -> Vec<String> {
        let mut changed = vec![];

        for change in changes {
            match change.kind {
                ChangeKind::Modified => {
                    tracing::info!("Reloading token file: {}", change.path.display());
                    match themes.load_file(&change.path) {
                        Ok(name) => {
                            tracing::info!("Reloaded theme '{}' from {}", name, change.path.display());
                            changed.push(name);
                        }
                        Err(e) => {
                            tracing::error!(
                                "Failed to reload token file {}: {}",
                                change.path.display(),
                                e
                            );
                        }
                    }
                }
                ChangeKind::Removed => {
                    tracing::info!("Token file removed: {}", change.path.display());
                    if let Some(name) = themes.remove_file(&change.path) {
                        changed.push(name);
                    }
                }
            }
        }

        changed
    }

    /// Check whether a changed path belongs to a watched token file.
    fn is_watched(&self, path: &Path) -> bool {
        if TokenFormat::from_path(path).is_none() {
            return false;
        }
        self.watched_paths.contains(path)
            || path.parent().is_some_and(|dir| self.watched_dirs.contains(dir))
    }

    /// Get the number of watched files and directories.
    pub fn watched_count(&self) -> usize {
        self.watched_paths.len() + self.watched_dirs.len()
    }

    /// Get the watched files and directories.
    pub fn watched_paths(&self) -> impl Iterator<Item = &Path> {
        self.watched_paths
            .iter()
            .chain(&self.watched_dirs)
            .map(|p| p.as_path())
    }
}
