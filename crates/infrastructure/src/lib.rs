//! Hostwatch Infrastructure Layer
pub mod hosts;

pub use hosts::{HostsSnapshot, HostsWatcher, WatchedHostsResolver};
