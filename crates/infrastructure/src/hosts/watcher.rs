use hostwatch_domain::HostsError;
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use super::parser::parse_hosts_file;
use super::snapshot::HostsSnapshot;

type WatchEvent = notify::Result<Event>;

/// Background task that re-parses the hosts file on every write and publishes
/// the result into a [`HostsSnapshot`].
///
/// The subscription is on the file's parent directory so that editors which
/// save by renaming a new file over the old one keep triggering reloads.
/// Events for other files in that directory are ignored.
///
/// Dropping the watcher closes the subscription and cancels the task.
pub struct HostsWatcher {
    _watcher: RecommendedWatcher,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl HostsWatcher {
    /// Subscribes to changes of `path` and spawns the reload loop on the current
    /// tokio runtime. `path` must be absolute and canonical, since event paths
    /// are compared against it verbatim.
    pub fn spawn(path: PathBuf, snapshot: Arc<HostsSnapshot>) -> Result<Self, HostsError> {
        let watch_dir = path
            .parent()
            .ok_or_else(|| {
                HostsError::WatchError(format!("{} has no parent directory", path.display()))
            })?
            .to_path_buf();

        let (tx, rx) = mpsc::unbounded_channel::<WatchEvent>();
        let mut watcher = notify::recommended_watcher(move |event: WatchEvent| {
            // Receiver gone means the loop already stopped.
            let _ = tx.send(event);
        })
        .map_err(|e| HostsError::WatchError(e.to_string()))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                HostsError::WatchError(format!("cannot watch {}: {}", watch_dir.display(), e))
            })?;

        let shutdown = CancellationToken::new();
        let task = tokio::spawn(watch_loop(path, snapshot, rx, shutdown.clone()));

        Ok(Self {
            _watcher: watcher,
            shutdown,
            task,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for HostsWatcher {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn watch_loop(
    path: PathBuf,
    snapshot: Arc<HostsSnapshot>,
    mut events: mpsc::UnboundedReceiver<WatchEvent>,
    shutdown: CancellationToken,
) {
    info!(path = %path.display(), "Hosts watcher started");

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                debug!(path = %path.display(), "Hosts watcher cancelled");
                break;
            }
            event = events.recv() => match event {
                Some(Ok(event)) => {
                    if is_reload_trigger(&event, &path) {
                        reload(&path, &snapshot).await;
                    } else {
                        trace!(kind = ?event.kind, paths = ?event.paths, "Ignoring watch event");
                    }
                }
                Some(Err(e)) => {
                    error!(error = %e, path = %path.display(), "Hosts watch error");
                }
                None => {
                    warn!(path = %path.display(), "Hosts watch channel closed");
                    break;
                }
            }
        }
    }

    info!(path = %path.display(), "Hosts watcher stopped");
}

async fn reload(path: &Path, snapshot: &HostsSnapshot) {
    match parse_hosts_file(path).await {
        Ok(table) => {
            let entries = table.len();
            let generation = snapshot.store(table);
            info!(path = %path.display(), entries, generation, "Hosts file reloaded");
        }
        Err(e) => {
            error!(error = %e, "Hosts file reload failed; keeping previous table");
        }
    }
}

fn is_reload_trigger(event: &Event, path: &Path) -> bool {
    is_write_kind(&event.kind) && event.paths.iter().any(|p| p == path)
}

fn is_write_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_)
            | EventKind::Modify(ModifyKind::Any)
            | EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Name(
                RenameMode::To | RenameMode::Both | RenameMode::Any
            ))
    )
}
