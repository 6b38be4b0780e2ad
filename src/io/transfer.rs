//! Blob handoff to the host filesystem
//!
//! The download step: writes a finished archive blob to its destination
//! path, creating parent directories as needed. Fire-and-forget from the
//! caller's perspective beyond the returned result; no handle to the blob
//! is retained.

use crate::io::error::{Result, SplitError};
use std::path::Path;

/// Write an archive blob to the given path
///
/// # Errors
///
/// Returns [`SplitError::FileSystem`] if the parent directory cannot be
/// created or the file cannot be written.
pub fn save_blob(bytes: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SplitError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, bytes).map_err(|e| SplitError::FileSystem {
        path: path.to_path_buf(),
        operation: "write archive",
        source: e,
    })
}
