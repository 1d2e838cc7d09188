use std::sync::Arc;

use tracing::debug;

use crate::ports::HostsResolverPort;

pub struct ReverseLookupUseCase {
    resolver: Arc<dyn HostsResolverPort>,
}

impl ReverseLookupUseCase {
    pub fn new(resolver: Arc<dyn HostsResolverPort>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, ip: &str) -> Vec<String> {
        let hostnames = self.resolver.reverse_lookup(ip);
        debug!(ip = %ip, matches = hostnames.len(), "Hosts reverse lookup");
        hostnames
    }
}
