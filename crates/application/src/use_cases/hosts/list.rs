use std::sync::Arc;

use hostwatch_domain::HostEntry;

use crate::ports::HostsResolverPort;

pub struct ListHostsUseCase {
    resolver: Arc<dyn HostsResolverPort>,
}

impl ListHostsUseCase {
    pub fn new(resolver: Arc<dyn HostsResolverPort>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self) -> Vec<HostEntry> {
        self.resolver.snapshot().sorted_entries()
    }
}
