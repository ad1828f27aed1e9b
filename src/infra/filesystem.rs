//! Filesystem operations
//!
//! Handles reading and writing the host configuration file.

use std::path::Path;

use crate::error::SetupError;

/// Write content to a file, creating or truncating it
pub fn write_file(path: &Path, content: &str) -> Result<(), SetupError> {
    std::fs::write(path, content).map_err(|e| SetupError::ConfigWrite {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, SetupError> {
    std::fs::read_to_string(path).map_err(|e| SetupError::ConfigParse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Check whether a regular file exists at `path`
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}
