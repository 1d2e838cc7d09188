use hostwatch_domain::{HostsError, HostsTable};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Reads and parses a hosts-style mapping file.
///
/// Only an unreadable file is an error. Invalid UTF-8 is replaced rather than
/// rejected, and lines that do not have the `<ip> <hostname> [<hostname> ...]`
/// shape are skipped.
pub async fn parse_hosts_file(path: &Path) -> Result<HostsTable, HostsError> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| HostsError::ParseError(path.display().to_string(), e.to_string()))?;

    let table = parse_hosts(&String::from_utf8_lossy(&bytes));

    debug!(path = %path.display(), entries = table.len(), "Hosts file parsed");
    Ok(table)
}

pub fn parse_hosts(contents: &str) -> HostsTable {
    let mut builder = HostsTable::builder();

    // Format:
    // 127.0.0.1	localhost loopback
    // # comment
    // ; comment
    for raw in contents.trim_matches([' ', '\t', '\r', '\n']).split('\n') {
        let line = raw.trim_matches([' ', '\t']).replace('\t', " ");
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        let Some((ip, names)) = line.split_once(' ') else {
            continue;
        };
        if ip.is_empty() {
            continue;
        }

        let ip: Arc<str> = Arc::from(ip);
        for hostname in names.split_whitespace() {
            builder.insert(hostname, Arc::clone(&ip));
        }
    }

    builder.build()
}
