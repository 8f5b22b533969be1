//! Boundary checks on user-supplied paths.

use std::path::{Path, PathBuf};

use line_triage_shared_kernel::{InfraResult, InfrastructureError};

use crate::persistence::FileReader;

/// `true` when `path` is a regular file that can be opened for reading.
pub fn is_readable_file(path: &Path) -> bool {
    path.is_file() && FileReader::open(path).is_ok()
}

/// Fails unless `path` exists and is a directory.
pub fn ensure_directory(path: &Path) -> InfraResult<()> {
    let metadata = std::fs::metadata(path).map_err(|source| InfrastructureError::FileSystemOperation {
        operation: "stat".to_string(),
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(InfrastructureError::FileSystemOperation {
            operation: "open directory".to_string(),
            path: path.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        })
    }
}

/// Absolute form of `path` for user-facing messages, falling back to `path` itself.
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
