use hostwatch_application::ports::HostsResolverPort;
use hostwatch_application::use_cases::{
    AppendHostEntryUseCase, ListHostsUseCase, LookupHostUseCase, ReverseLookupUseCase,
};
use hostwatch_domain::Config;
use hostwatch_infrastructure::WatchedHostsResolver;
use std::sync::Arc;
use tracing::info;

pub struct HostsServices {
    pub resolver: Arc<WatchedHostsResolver>,
    pub lookup: LookupHostUseCase,
    pub reverse_lookup: ReverseLookupUseCase,
    pub append: AppendHostEntryUseCase,
    pub list: ListHostsUseCase,
}

impl HostsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        info!(path = %config.hosts.resolve_path().display(), "Initializing hosts resolver");

        let resolver = Arc::new(WatchedHostsResolver::from_config(&config.hosts).await?);
        let port: Arc<dyn HostsResolverPort> = resolver.clone();

        Ok(Self {
            lookup: LookupHostUseCase::new(port.clone()),
            reverse_lookup: ReverseLookupUseCase::new(port.clone()),
            append: AppendHostEntryUseCase::new(port.clone()),
            list: ListHostsUseCase::new(port),
            resolver,
        })
    }
}
