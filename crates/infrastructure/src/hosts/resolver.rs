use async_trait::async_trait;
use hostwatch_application::ports::HostsResolverPort;
use hostwatch_domain::{HostEntry, HostsConfig, HostsError, HostsTable};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use super::parser::parse_hosts_file;
use super::snapshot::HostsSnapshot;
use super::watcher::HostsWatcher;

/// Hostname resolution against a hosts file that is reloaded whenever it is
/// written.
///
/// Construction parses the file before returning, so the first lookup always
/// sees a complete table. Lookups read whatever table is published at call
/// time and never wait on a reload in progress.
pub struct WatchedHostsResolver {
    source_path: PathBuf,
    snapshot: Arc<HostsSnapshot>,
    watcher: Option<HostsWatcher>,
}

impl WatchedHostsResolver {
    /// Serves `path`, or the platform hosts file when `None`. Must be called
    /// from within a tokio runtime.
    pub async fn new(path: Option<PathBuf>) -> Result<Self, HostsError> {
        let config = HostsConfig {
            path,
            ..HostsConfig::default()
        };
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &HostsConfig) -> Result<Self, HostsError> {
        let requested = config.resolve_path();
        let source_path = fs::canonicalize(&requested).await.map_err(|e| {
            HostsError::ParseError(requested.display().to_string(), e.to_string())
        })?;

        let table = parse_hosts_file(&source_path).await?;
        let entries = table.len();
        let snapshot = Arc::new(HostsSnapshot::new(table));

        let watcher = if config.watch {
            Some(HostsWatcher::spawn(
                source_path.clone(),
                Arc::clone(&snapshot),
            )?)
        } else {
            None
        };

        info!(
            path = %source_path.display(),
            entries,
            watch = config.watch,
            "Hosts resolver initialized"
        );

        Ok(Self {
            source_path,
            snapshot,
            watcher,
        })
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.as_ref().is_some_and(HostsWatcher::is_running)
    }

    pub fn has_changed_since(&self, generation: u64) -> bool {
        self.snapshot.has_changed_since(generation)
    }

    fn io_error(&self, e: std::io::Error) -> HostsError {
        HostsError::IoError(self.source_path.display().to_string(), e.to_string())
    }
}

#[async_trait]
impl HostsResolverPort for WatchedHostsResolver {
    #[inline]
    fn lookup(&self, hostname: &str) -> Result<Arc<str>, HostsError> {
        self.snapshot.with_current(|table| {
            table
                .get(hostname)
                .cloned()
                .ok_or_else(|| HostsError::NotFound(hostname.to_string()))
        })
    }

    fn reverse_lookup(&self, ip: &str) -> Vec<String> {
        self.snapshot.with_current(|table| table.hostnames_for(ip))
    }

    async fn append_entry(&self, ip: &str, hostname: &str) -> Result<(), HostsError> {
        HostEntry::validate(ip, hostname).map_err(HostsError::InvalidEntry)?;
        let line = HostEntry::new(ip, hostname).to_line();

        let file = OpenOptions::new()
            .append(true)
            .open(&self.source_path)
            .await
            .map_err(|e| self.io_error(e))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| self.io_error(e))?;
        writer.flush().await.map_err(|e| self.io_error(e))?;

        Ok(())
    }

    fn source_path(&self) -> &Path {
        &self.source_path
    }

    fn snapshot(&self) -> Arc<HostsTable> {
        self.snapshot.load()
    }

    fn generation(&self) -> u64 {
        self.snapshot.generation()
    }
}
