use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostsError {
    #[error("Failed to read hosts file {0}: {1}")]
    ParseError(String, String),

    #[error("Host not found: {0}")]
    NotFound(String),

    #[error("I/O error on hosts file {0}: {1}")]
    IoError(String, String),

    #[error("Hosts file watch error: {0}")]
    WatchError(String),

    #[error("Invalid hosts entry: {0}")]
    InvalidEntry(String),
}

impl HostsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, HostsError::NotFound(_))
    }
}
