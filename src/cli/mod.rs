//! Command-line interface module
//!
//! This module handles argument parsing and console wiring.
//! The setup flow itself lives in [`crate::core::wizard`].

pub mod output;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::core::wizard::SetupWizard;
use crate::infra::process::ShellRunner;

/// ChihuahuaOS host setup
///
/// Records the GCC cross-compiler locations in host_config.ini and
/// optionally runs 'meson setup' for every project.
#[derive(Parser, Debug)]
#[command(name = "chihuahua-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// Run the setup wizard on the process console
    pub fn run(self) -> Result<()> {
        let workdir = match self.directory {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        if !workdir.is_dir() {
            bail!("Not a directory: {}", workdir.display());
        }
        tracing::debug!("Working directory: {}", workdir.display());

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut wizard = SetupWizard::new(&workdir, stdin.lock(), stdout.lock(), ShellRunner);
        let outcome = wizard.run().context("Host setup failed")?;

        tracing::info!(
            "Setup finished (config written: {}, build setup: {:?})",
            outcome.written.is_some(),
            outcome.build_setup.map(|s| s.code)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["chihuahua-setup"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.directory.is_none());
    }

    #[test]
    fn test_parse_directory_and_verbosity() {
        let cli = Cli::try_parse_from(["chihuahua-setup", "-vv", "-C", "/tmp/tree"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp/tree")));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["chihuahua-setup", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_quiet_alone_parses() {
        let cli = Cli::try_parse_from(["chihuahua-setup", "-q"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["chihuahua-setup", "extra"]).is_err());
    }
}
