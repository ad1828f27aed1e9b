//! Log level selection and error display

use tracing::level_filters::LevelFilter;

/// Console output settings derived from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Number of `-v` flags
    pub verbose: u8,
    /// Whether `-q` was given
    pub quiet: bool,
}

impl OutputConfig {
    /// Create output settings from CLI flags
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { verbose, quiet }
    }

    /// Default log level, before `RUST_LOG` directives are applied
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}

/// Format an error and its causes for the terminal
pub fn format_error(error: &anyhow::Error) -> String {
    let mut message = format!("Error: {error}");
    for cause in error.chain().skip(1) {
        message.push_str(&format!("\n  Caused by: {cause}"));
    }
    message
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{}", format_error(error));
}
