use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostsConfig {
    /// Mapping file to serve. `None` means the platform hosts file.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Reload the table whenever the file is written.
    #[serde(default = "default_watch")]
    pub watch: bool,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            path: None,
            watch: default_watch(),
        }
    }
}

impl HostsConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn resolve_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_hosts_path)
    }
}

fn default_watch() -> bool {
    true
}

#[cfg(windows)]
pub fn default_hosts_path() -> PathBuf {
    let root = std::env::var_os("SystemRoot").unwrap_or_else(|| r"C:\Windows".into());
    PathBuf::from(root).join(r"System32\drivers\etc\hosts")
}

#[cfg(not(windows))]
pub fn default_hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}
