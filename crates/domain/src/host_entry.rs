use std::sync::Arc;

/// One `ip hostname` association as it appears in (or is appended to) a hosts file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub ip: Arc<str>,
    pub hostname: Arc<str>,
}

impl HostEntry {
    pub fn new(ip: &str, hostname: &str) -> Self {
        Self {
            ip: Arc::from(ip),
            hostname: Arc::from(hostname),
        }
    }

    /// Rejects tokens that would not survive a round trip through the file format:
    /// empty tokens, embedded whitespace, or a leading comment marker on the IP.
    pub fn validate(ip: &str, hostname: &str) -> Result<(), String> {
        if ip.is_empty() {
            return Err("IP address cannot be empty".to_string());
        }

        if hostname.is_empty() {
            return Err("Hostname cannot be empty".to_string());
        }

        if ip.chars().any(char::is_whitespace) {
            return Err(format!("IP address '{}' contains whitespace", ip.escape_debug()));
        }

        if hostname.chars().any(char::is_whitespace) {
            return Err(format!(
                "Hostname '{}' contains whitespace",
                hostname.escape_debug()
            ));
        }

        if ip.starts_with('#') || ip.starts_with(';') {
            return Err(format!("IP address '{}' starts with a comment marker", ip));
        }

        Ok(())
    }

    /// Exact bytes appended to the hosts file for this entry.
    pub fn to_line(&self) -> String {
        format!("\n{} {}", self.ip, self.hostname)
    }
}
