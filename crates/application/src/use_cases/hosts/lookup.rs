use std::sync::Arc;

use hostwatch_domain::HostsError;
use tracing::debug;

use crate::ports::HostsResolverPort;

pub struct LookupHostUseCase {
    resolver: Arc<dyn HostsResolverPort>,
}

impl LookupHostUseCase {
    pub fn new(resolver: Arc<dyn HostsResolverPort>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, hostname: &str) -> Result<Arc<str>, HostsError> {
        match self.resolver.lookup(hostname) {
            Ok(ip) => {
                debug!(hostname = %hostname, ip = %ip, "Hosts lookup hit");
                Ok(ip)
            }
            Err(e) => {
                debug!(hostname = %hostname, "Hosts lookup miss");
                Err(e)
            }
        }
    }
}
