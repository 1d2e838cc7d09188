pub mod errors;
pub mod hosts;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use hosts::{default_hosts_path, HostsConfig};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
