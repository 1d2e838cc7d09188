#![allow(dead_code)]

use async_trait::async_trait;
use hostwatch_application::ports::HostsResolverPort;
use hostwatch_domain::{HostEntry, HostsError, HostsTable};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory resolver that applies appends immediately.
pub struct MockHostsResolver {
    table: RwLock<Arc<HostsTable>>,
    appended: RwLock<Vec<HostEntry>>,
    should_fail: bool,
    path: PathBuf,
}

impl MockHostsResolver {
    pub fn new() -> Self {
        Self::with_entries(vec![])
    }

    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        let table: HostsTable = entries
            .into_iter()
            .map(|(ip, host)| HostEntry::new(ip, host))
            .collect();
        Self {
            table: RwLock::new(Arc::new(table)),
            appended: RwLock::new(Vec::new()),
            should_fail: false,
            path: PathBuf::from("/tmp/mock-hosts"),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn appended(&self) -> Vec<HostEntry> {
        self.appended.read().unwrap().clone()
    }
}

#[async_trait]
impl HostsResolverPort for MockHostsResolver {
    fn lookup(&self, hostname: &str) -> Result<Arc<str>, HostsError> {
        self.table
            .read()
            .unwrap()
            .get(hostname)
            .cloned()
            .ok_or_else(|| HostsError::NotFound(hostname.to_string()))
    }

    fn reverse_lookup(&self, ip: &str) -> Vec<String> {
        self.table.read().unwrap().hostnames_for(ip)
    }

    async fn append_entry(&self, ip: &str, hostname: &str) -> Result<(), HostsError> {
        if self.should_fail {
            return Err(HostsError::IoError(
                self.path.display().to_string(),
                "Permission denied".to_string(),
            ));
        }
        HostEntry::validate(ip, hostname).map_err(HostsError::InvalidEntry)?;

        let entry = HostEntry::new(ip, hostname);
        self.appended.write().unwrap().push(entry.clone());

        let mut table = self.table.write().unwrap();
        let next: HostsTable = table
            .iter()
            .map(|(h, i)| HostEntry::new(i, h))
            .chain(std::iter::once(entry))
            .collect();
        *table = Arc::new(next);
        Ok(())
    }

    fn source_path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> Arc<HostsTable> {
        self.table.read().unwrap().clone()
    }

    fn generation(&self) -> u64 {
        1
    }
}
