use compact_str::CompactString;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::HostEntry;

/// Immutable hostname → IP mapping produced by one parse of a hosts file.
///
/// Keys are matched exactly and case-sensitively. Many hostnames share the
/// same `Arc<str>` IP when they came from the same line. There is no way to
/// mutate a table once built; a reload produces a whole new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsTable {
    entries: FxHashMap<CompactString, Arc<str>>,
}

impl HostsTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> HostsTableBuilder {
        HostsTableBuilder::default()
    }

    #[inline]
    pub fn lookup(&self, hostname: &str) -> Option<&str> {
        self.entries.get(hostname).map(|ip| ip.as_ref())
    }

    /// Like [`lookup`](Self::lookup) but hands back the shared IP string.
    #[inline]
    pub fn get(&self, hostname: &str) -> Option<&Arc<str>> {
        self.entries.get(hostname)
    }

    /// All hostnames mapped to `ip`, in the table's enumeration order.
    pub fn hostnames_for(&self, ip: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, value)| value.as_ref() == ip)
            .map(|(hostname, _)| hostname.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(hostname, ip)| (hostname.as_str(), ip.as_ref()))
    }

    /// Entries sorted by IP then hostname, for stable display.
    pub fn sorted_entries(&self) -> Vec<HostEntry> {
        let mut entries: Vec<HostEntry> = self
            .entries
            .iter()
            .map(|(hostname, ip)| HostEntry {
                ip: Arc::clone(ip),
                hostname: Arc::from(hostname.as_str()),
            })
            .collect();
        entries.sort_by(|a, b| a.ip.cmp(&b.ip).then_with(|| a.hostname.cmp(&b.hostname)));
        entries
    }
}

/// Accumulates entries during a parse. Later inserts for the same hostname win.
#[derive(Debug, Default)]
pub struct HostsTableBuilder {
    entries: FxHashMap<CompactString, Arc<str>>,
}

impl HostsTableBuilder {
    pub fn insert(&mut self, hostname: &str, ip: Arc<str>) {
        self.entries.insert(CompactString::from(hostname), ip);
    }

    pub fn build(self) -> HostsTable {
        HostsTable {
            entries: self.entries,
        }
    }
}

impl FromIterator<HostEntry> for HostsTable {
    fn from_iter<I: IntoIterator<Item = HostEntry>>(iter: I) -> Self {
        let mut builder = HostsTable::builder();
        for entry in iter {
            builder.insert(&entry.hostname, entry.ip);
        }
        builder.build()
    }
}
