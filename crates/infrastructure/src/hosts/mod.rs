pub mod parser;
pub mod resolver;
pub mod snapshot;
pub mod watcher;

pub use parser::{parse_hosts, parse_hosts_file};
pub use resolver::WatchedHostsResolver;
pub use snapshot::HostsSnapshot;
pub use watcher::HostsWatcher;
