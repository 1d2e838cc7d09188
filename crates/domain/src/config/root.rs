use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::hosts::HostsConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG: &str = "hostwatch.toml";
const SYSTEM_CONFIG: &str = "/etc/hostwatch/config.toml";

/// Main configuration structure for Hostwatch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Mapping file location and reload behavior
    #[serde(default)]
    pub hosts: HostsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hostwatch.toml in current directory
    /// 3. /etc/hostwatch/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(hosts) = overrides.hosts_path {
            self.hosts.path = Some(hosts);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.no_watch {
            self.hosts.watch = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.hosts.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "Hosts file path cannot be empty".to_string(),
                ));
            }
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub hosts_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_watch: bool,
}
