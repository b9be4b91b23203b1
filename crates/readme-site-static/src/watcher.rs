//! File watching for rebuild-on-change.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period used to coalesce bursts of filesystem events.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A watched file was created or modified
    Changed(PathBuf),

    /// A watched file was removed
    Removed(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            Self::Changed(path) | Self::Removed(path) => path,
        }
    }
}

/// Watches a fixed set of files.
///
/// The parent directory of each file is watched rather than the file itself,
/// so editors that save by replacing the file are still picked up. Events for
/// any other file in those directories are dropped. When a parent directory
/// does not exist yet, its nearest existing ancestor is watched recursively
/// instead.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given files.
    ///
    /// Returns the watcher and a channel to receive events. The channel closes
    /// when the watcher is dropped.
    pub fn new(
        files: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), io::Error> {
        let targets = files
            .iter()
            .map(|f| resolve(f))
            .collect::<Result<Vec<_>, _>>()?;

        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(io::Error::other)?;

        // One watch per directory, recursive if any target below it is missing
        let mut dirs: BTreeMap<&Path, bool> = BTreeMap::new();
        for target in &targets {
            *dirs.entry(&target.watch_dir).or_insert(false) |= target.recursive;
        }
        for (dir, recursive) in dirs {
            let mode = if recursive {
                tracing::warn!(
                    "Directory for a watched file is missing, watching {} recursively",
                    dir.display()
                );
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            watcher.watch(dir, mode).map_err(io::Error::other)?;
        }

        let files: Vec<PathBuf> = targets.into_iter().map(|t| t.file).collect();
        std::thread::spawn(move || {
            while let Ok(first) = sync_rx.recv() {
                // Collect the rest of the burst, keeping the last event per file
                let mut pending: Vec<WatchEvent> = Vec::new();
                let mut next = Some(first);
                while let Some(event) = next {
                    for path in &event.paths {
                        if let Some(e) = classify_event(&files, path, &event.kind) {
                            pending.retain(|p| p.path() != e.path());
                            pending.push(e);
                        }
                    }
                    next = sync_rx.recv_timeout(DEBOUNCE).ok();
                }

                for e in pending {
                    if async_tx.blocking_send(e).is_err() {
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// A watched file and the directory watch that covers it.
#[derive(Debug, PartialEq)]
struct Target {
    /// Absolute path of the file
    file: PathBuf,

    /// Existing directory to register with notify
    watch_dir: PathBuf,

    /// Whether the file sits below a directory that does not exist yet
    recursive: bool,
}

/// Resolve `file` against its nearest existing ancestor directory.
///
/// Neither the file nor its parent directory needs to exist.
fn resolve(file: &Path) -> io::Result<Target> {
    let name = file.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Not a file path: {}", file.display()),
        )
    })?;

    let parent = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let (existing, missing) = match parent
        .ancestors()
        .find(|a| !a.as_os_str().is_empty() && a.is_dir())
    {
        Some(dir) => (dir, parent.strip_prefix(dir).unwrap_or(Path::new(""))),
        None => (Path::new("."), parent),
    };

    let watch_dir = fs::canonicalize(existing)?;
    Ok(Target {
        file: watch_dir.join(missing).join(name),
        recursive: !missing.as_os_str().is_empty(),
        watch_dir,
    })
}

/// Classify a notify event for one path into a WatchEvent.
fn classify_event(targets: &[PathBuf], path: &Path, kind: &EventKind) -> Option<WatchEvent> {
    if !targets.iter().any(|t| t == path) {
        return None;
    }

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            Some(WatchEvent::Changed(path.to_path_buf()))
        }
        EventKind::Remove(_) => Some(WatchEvent::Removed(path.to_path_buf())),
        _ => None,
    }
}
