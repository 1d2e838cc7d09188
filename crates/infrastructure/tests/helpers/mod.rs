#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

pub const RELOAD_TIMEOUT: Duration = Duration::from_secs(10);

pub fn hosts_file(content: &str) -> NamedTempFile {
    hosts_file_bytes(content.as_bytes())
}

pub fn hosts_file_bytes(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// Polls `condition` until it holds or [`RELOAD_TIMEOUT`] elapses.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    let result = tokio::time::timeout(RELOAD_TIMEOUT, async {
        loop {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await;
    result.is_ok()
}

/// Replaces `path` by renaming a fully written sibling over it, so a reload
/// never reads a half-written file.
pub fn replace_atomically(path: &Path, contents: impl AsRef<[u8]>) {
    let staged = path.with_extension("staged");
    std::fs::write(&staged, contents).unwrap();
    std::fs::rename(&staged, path).unwrap();
}

pub fn hosts_in_dir(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).unwrap();
    path
}
