use async_trait::async_trait;
use hostwatch_domain::{HostsError, HostsTable};
use std::path::Path;
use std::sync::Arc;

/// Read side is synchronous and never waits on a reload; only appends touch disk.
#[async_trait]
pub trait HostsResolverPort: Send + Sync {
    fn lookup(&self, hostname: &str) -> Result<Arc<str>, HostsError>;

    fn reverse_lookup(&self, ip: &str) -> Vec<String>;

    async fn append_entry(&self, ip: &str, hostname: &str) -> Result<(), HostsError>;

    fn source_path(&self) -> &Path;

    /// The table currently published, for several reads against one consistent view.
    fn snapshot(&self) -> Arc<HostsTable>;

    /// Number of tables published since construction (the initial parse is 1).
    fn generation(&self) -> u64;
}
