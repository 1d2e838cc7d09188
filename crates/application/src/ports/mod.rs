mod hosts_resolver;

pub use hosts_resolver::HostsResolverPort;
