//! Fixed file names, keys and commands

/// Host configuration file, relative to the working directory
pub const HOST_CONFIG_FILE: &str = "host_config.ini";

/// Section holding the cross-compiler constants
pub const CONFIG_SECTION: &str = "constants";

/// Key for the ELF cross-compiler directory
pub const GCC_CROSS_KEY: &str = "gcc_cross_compiler_path";

/// Key for the MinGW cross-compiler directory (bootloader only)
pub const GCC_UEFI_CROSS_KEY: &str = "gcc_uefi_cross_compiler_path";

/// Separator appended to non-empty directory paths
pub const PATH_SEPARATOR: char = '/';

/// Shell used to run the build-configuration script
pub const SETUP_SHELL: &str = "bash";

/// Build-configuration script, relative to the working directory
pub const SETUP_SCRIPT: &str = "./config_meson_all.sh";
