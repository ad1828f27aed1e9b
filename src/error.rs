//! Error types for chihuahua-setup
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Setup wizard errors
#[derive(Error, Debug)]
pub enum SetupError {
    /// Failed to write the host configuration file
    #[error("Failed to write host configuration '{path}': {error}")]
    ConfigWrite { path: PathBuf, error: String },

    /// Existing host configuration could not be read or parsed
    #[error("Cannot load host configuration '{path}': {error}")]
    ConfigParse { path: PathBuf, error: String },

    /// Console I/O failed while prompting
    #[error("Console I/O error: {0}")]
    Prompt(#[from] std::io::Error),

    /// Input ended before an answer was given
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Shell used to run the setup script is not installed
    #[error("'{shell}' not found in PATH, cannot run the setup script")]
    ShellNotFound { shell: String },

    /// Setup script could not be started
    #[error("Failed to launch '{script}': {error}")]
    ScriptLaunch { script: String, error: String },
}
