//! External process execution
//!
//! The setup script is an opaque collaborator: it is started, waited for,
//! and its exit status is only reported. [`CommandRunner`] is the seam that
//! lets the wizard be driven without launching a real shell.

use std::path::Path;
use std::process::Command;

use crate::error::SetupError;

/// Exit status of a finished child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitSummary {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExitSummary {
    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a program to completion
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits
    ///
    /// A non-zero exit is reported through [`ExitSummary`], never as an
    /// error. Errors mean the process could not be started at all.
    fn run(&mut self, program: &str, args: &[&str], cwd: &Path)
        -> Result<ExitSummary, SetupError>;
}

/// Runs programs found in `PATH` with the console attached
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(
        &mut self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<ExitSummary, SetupError> {
        let resolved = which::which(program).map_err(|_| SetupError::ShellNotFound {
            shell: program.to_string(),
        })?;

        tracing::debug!("Running {} {:?} in {}", resolved.display(), args, cwd.display());

        let status = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| SetupError::ScriptLaunch {
                script: format!("{program} {}", args.join(" ")),
                error: e.to_string(),
            })?;

        Ok(ExitSummary {
            code: status.code(),
        })
    }
}
