//! # WASM Binary
//!
//! Detects whether the local WASM artifact differs from the binary attached
//! to the remote app. The remote service stores an MD5 hex digest per binary.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// MD5 hex digest of the file at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn wasm_checksum(path: impl AsRef<Path>) -> Result<String> {
    let path = normalize_path(path.as_ref());
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read WASM file: {}", path.display()))?;
    let checksum = format!("{:x}", md5::compute(&bytes));
    debug!(
        "WASM file {} ({} bytes) has checksum {}",
        path.display(),
        bytes.len(),
        checksum
    );
    Ok(checksum)
}

/// Check whether the local WASM file differs from the remote binary checksum
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn has_wasm_binary_changed(path: impl AsRef<Path>, known_checksum: &str) -> Result<bool> {
    Ok(wasm_checksum(path)? != known_checksum)
}

/// Lexically normalize a path: drop `.` segments and fold `..` into the previous segment
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}
