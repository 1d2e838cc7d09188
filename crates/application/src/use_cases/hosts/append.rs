use std::sync::Arc;

use hostwatch_domain::{HostEntry, HostsError};
use tracing::{error, info};

use crate::ports::HostsResolverPort;

/// Appends a new mapping to the backing file.
///
/// The in-memory table is not touched: the new entry becomes visible once the
/// file watcher has reloaded the file.
pub struct AppendHostEntryUseCase {
    resolver: Arc<dyn HostsResolverPort>,
}

impl AppendHostEntryUseCase {
    pub fn new(resolver: Arc<dyn HostsResolverPort>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, ip: &str, hostname: &str) -> Result<HostEntry, HostsError> {
        if let Err(e) = self.resolver.append_entry(ip, hostname).await {
            error!(error = %e, ip = %ip, hostname = %hostname, "Failed to append hosts entry");
            return Err(e);
        }

        info!(
            ip = %ip,
            hostname = %hostname,
            path = %self.resolver.source_path().display(),
            "Hosts entry appended"
        );

        Ok(HostEntry::new(ip, hostname))
    }
}
