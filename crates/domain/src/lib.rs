//! Hostwatch Domain Layer
pub mod config;
pub mod errors;
pub mod host_entry;
pub mod hosts_table;

pub use config::{CliOverrides, Config, ConfigError, HostsConfig, LoggingConfig};
pub use errors::HostsError;
pub use host_entry::HostEntry;
pub use hosts_table::{HostsTable, HostsTableBuilder};
