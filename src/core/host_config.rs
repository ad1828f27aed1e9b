//! Host cross-compiler configuration
//!
//! Models the contents of `host_config.ini`, the Meson machine file that
//! records where the GCC cross-compilers live on this host. The file is
//! consumed by the Meson cross files of every project in the tree.
//!
//! The format is deliberately tiny:
//!
//! ```ini
//! [constants]
//! gcc_cross_compiler_path = '/opt/cross/bin/'
//! gcc_uefi_cross_compiler_path = ''
//! ```
//!
//! An empty path means the tools are expected to be found through `PATH`.

use std::path::Path;

use serde::Deserialize;

use crate::config::defaults::{
    CONFIG_SECTION, GCC_CROSS_KEY, GCC_UEFI_CROSS_KEY, PATH_SEPARATOR,
};
use crate::error::SetupError;

/// Cross-compiler directories for this host
///
/// [`HostConfig::new`] normalizes user answers: a non-empty path always ends
/// with a separator so Meson can prepend it directly to tool names.
/// [`HostConfig::parse`] keeps whatever the file on disk holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    gcc_cross_compiler_path: String,
    gcc_uefi_cross_compiler_path: String,
}

/// On-disk layout, used only for reading an existing file back
#[derive(Debug, Deserialize)]
struct HostConfigFile {
    constants: RawConstants,
}

#[derive(Debug, Deserialize)]
struct RawConstants {
    #[serde(default)]
    gcc_cross_compiler_path: String,
    #[serde(default)]
    gcc_uefi_cross_compiler_path: String,
}

/// Append a trailing separator to a non-empty directory path
///
/// Empty input stays empty and a path that already ends with the separator
/// is returned unchanged.
pub fn normalize_dir_path(path: &str) -> String {
    let mut normalized = path.to_string();
    if !normalized.is_empty() && !normalized.ends_with(PATH_SEPARATOR) {
        normalized.push(PATH_SEPARATOR);
    }
    normalized
}

impl HostConfig {
    /// Create a configuration from raw user answers
    pub fn new(gcc_cross_path: &str, gcc_uefi_cross_path: &str) -> Self {
        Self {
            gcc_cross_compiler_path: normalize_dir_path(gcc_cross_path),
            gcc_uefi_cross_compiler_path: normalize_dir_path(gcc_uefi_cross_path),
        }
    }

    /// Directory containing the `x86_64-elf-*` cross tools
    pub fn gcc_cross_compiler_path(&self) -> &str {
        &self.gcc_cross_compiler_path
    }

    /// Directory containing the `x86_64-w64-mingw32-*` tools (bootloader)
    pub fn gcc_uefi_cross_compiler_path(&self) -> &str {
        &self.gcc_uefi_cross_compiler_path
    }

    /// Render the file contents written to `host_config.ini`
    ///
    /// Values are single-quoted verbatim, the way Meson machine files
    /// expect string constants.
    pub fn render(&self) -> String {
        format!(
            "[{CONFIG_SECTION}]\n\
             {GCC_CROSS_KEY} = '{}'\n\
             {GCC_UEFI_CROSS_KEY} = '{}'\n",
            self.gcc_cross_compiler_path, self.gcc_uefi_cross_compiler_path
        )
    }

    /// Parse the contents of an existing `host_config.ini`
    ///
    /// Values are kept verbatim, since that is what Meson will read. Missing
    /// keys are treated as empty paths. `path` is only used for error
    /// reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, SetupError> {
        let file: HostConfigFile =
            toml::from_str(content).map_err(|e| SetupError::ConfigParse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        Ok(Self {
            gcc_cross_compiler_path: file.constants.gcc_cross_compiler_path,
            gcc_uefi_cross_compiler_path: file.constants.gcc_uefi_cross_compiler_path,
        })
    }
}
