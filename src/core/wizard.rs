//! Interactive host setup
//!
//! Walks the user through recording the cross-compiler locations in
//! `host_config.ini` and optionally running the Meson configuration script
//! for every project in the tree.
//!
//! The flow is strictly linear:
//!
//! 1. If `host_config.ini` is missing, ask for both compiler directories and
//!    write the file. Otherwise show the current values and how to reset.
//! 2. Ask whether to run `config_meson_all.sh`, re-prompting until the
//!    answer is `y` or `n`.
//!
//! Console input, console output and process execution are all injected so
//! the whole flow can be driven from tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::defaults::{
    GCC_CROSS_KEY, GCC_UEFI_CROSS_KEY, HOST_CONFIG_FILE, SETUP_SCRIPT, SETUP_SHELL,
};
use crate::core::host_config::HostConfig;
use crate::error::SetupError;
use crate::infra::filesystem::{file_exists, read_file, write_file};
use crate::infra::process::{CommandRunner, ExitSummary};

const WELCOME: &str = "Welcome to the ChihuahuaOS core setup utility! \
    This will configure the project according to your host environment.";

const CROSS_COMPILER_HELP: &str = "You need a GCC cross-compiler to start. \
    If you don't have one, look up how to build it on osdev.org. \
    It's also necessary to give the path to the directory containing the cross-compiler, \
    as it needs to have the following tools: '*-gcc', '*-g++', '*-ar', and '*-strip', \
    where the wildcard will contain either 'x86_64-elf-' OR 'x86_64-w64-mingw32-', \
    depending on the cross-compiler. If the PATH contains the directory, \
    you can just press 'Enter' when you are asked about the directory path.";

const GCC_CROSS_PROMPT: &str = "The path to the directory containing the GCC cross-compiler \
    (NOTE: use the absolute path, without any variables):";

const GCC_UEFI_CROSS_PROMPT: &str = "The path to the GCC MinGW cross-compiler \
    (x86_64-w64-mingw32-*, only for the bootloader) \
    (NOTE: use the absolute path, without any variables):";

const MESON_SETUP_HELP: &str = "You need to run 'meson setup' in all the projects with \
    multiple '--cross-file' arguments and the correct pkg-config prefixes.";

const RUN_SETUP_PROMPT: &str = "Would you like to run 'meson setup' now? [y/n]:";

/// What a completed wizard run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOutcome {
    /// Configuration written during this run, `None` if one already existed
    pub written: Option<HostConfig>,
    /// Exit status of the setup script, `None` if the user declined
    pub build_setup: Option<ExitSummary>,
}

/// Host setup wizard
pub struct SetupWizard<I, O, R> {
    workdir: PathBuf,
    input: I,
    output: O,
    runner: R,
}

/// Strip the line terminator returned by `read_line`, keeping other whitespace
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

impl<I: BufRead, O: Write, R: CommandRunner> SetupWizard<I, O, R> {
    /// Create a wizard operating in `workdir`
    pub fn new(workdir: &Path, input: I, output: O, runner: R) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            input,
            output,
            runner,
        }
    }

    /// Path of the host configuration file
    pub fn config_path(&self) -> PathBuf {
        self.workdir.join(HOST_CONFIG_FILE)
    }

    /// Run the complete setup flow
    pub fn run(&mut self) -> Result<WizardOutcome, SetupError> {
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output)?;

        let written = if self.detect_existing_config() {
            tracing::debug!("Found existing {}", self.config_path().display());
            self.notify_reset()?;
            None
        } else {
            let config = self.prompt_for_paths()?;
            self.write_config(&config)?;
            Some(config)
        };

        let build_setup = if self.prompt_run_build_setup()? {
            Some(self.run_build_setup()?)
        } else {
            tracing::debug!("Skipping build setup");
            None
        };

        writeln!(self.output, "Configuration complete!")?;
        self.output.flush()?;

        Ok(WizardOutcome {
            written,
            build_setup,
        })
    }

    /// Whether `host_config.ini` already exists in the working directory
    pub fn detect_existing_config(&self) -> bool {
        file_exists(&self.config_path())
    }

    /// Ask for both cross-compiler directories
    pub fn prompt_for_paths(&mut self) -> Result<HostConfig, SetupError> {
        writeln!(self.output, "{CROSS_COMPILER_HELP}")?;
        writeln!(self.output)?;

        let gcc_cross_path = self.read_answer(GCC_CROSS_PROMPT)?;
        let gcc_uefi_cross_path = self.read_answer(GCC_UEFI_CROSS_PROMPT)?;

        let config = HostConfig::new(&gcc_cross_path, &gcc_uefi_cross_path);
        tracing::debug!(
            "Normalized paths: {GCC_CROSS_KEY}='{}' {GCC_UEFI_CROSS_KEY}='{}'",
            config.gcc_cross_compiler_path(),
            config.gcc_uefi_cross_compiler_path()
        );
        Ok(config)
    }

    /// Write `config` to `host_config.ini`, replacing any previous contents
    pub fn write_config(&mut self, config: &HostConfig) -> Result<PathBuf, SetupError> {
        let path = self.config_path();
        write_file(&path, &config.render())?;
        tracing::info!("Wrote {}", path.display());

        writeln!(self.output, "Paths written to '{HOST_CONFIG_FILE}'")?;
        writeln!(self.output)?;
        Ok(path)
    }

    /// Ask whether to run the setup script until the answer is `y` or `n`
    pub fn prompt_run_build_setup(&mut self) -> Result<bool, SetupError> {
        writeln!(self.output, "{MESON_SETUP_HELP}")?;

        loop {
            let answer = self.read_answer(RUN_SETUP_PROMPT)?;
            match answer.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {
                    tracing::debug!("Rejected answer {answer:?}");
                    writeln!(
                        self.output,
                        "Unknown option: {answer}. Please enter 'y' or 'n'."
                    )?;
                }
            }
        }
    }

    /// Run `config_meson_all.sh` and wait for it
    ///
    /// The script's exit status is reported, not enforced: the user is
    /// asked to check its output.
    pub fn run_build_setup(&mut self) -> Result<ExitSummary, SetupError> {
        let script_path = self.workdir.join(SETUP_SCRIPT);
        if !file_exists(&script_path) {
            return Err(SetupError::ScriptLaunch {
                script: script_path.display().to_string(),
                error: "file not found".to_string(),
            });
        }

        self.output.flush()?;
        let summary = self
            .runner
            .run(SETUP_SHELL, &[SETUP_SCRIPT], &self.workdir)?;

        if summary.success() {
            tracing::debug!("{SETUP_SCRIPT} exited successfully");
        } else {
            tracing::warn!("{SETUP_SCRIPT} exited with status {:?}", summary.code);
        }

        writeln!(
            self.output,
            "'meson setup' was run, check its output to determine if it was successful or not."
        )?;
        writeln!(self.output)?;
        Ok(summary)
    }

    /// Show the existing configuration and how to reset it
    fn notify_reset(&mut self) -> Result<(), SetupError> {
        let path = self.config_path();
        match read_file(&path).and_then(|content| HostConfig::parse(&content, &path)) {
            Ok(config) => {
                writeln!(self.output, "Current cross-compiler paths:")?;
                writeln!(
                    self.output,
                    "  {GCC_CROSS_KEY} = '{}'",
                    config.gcc_cross_compiler_path()
                )?;
                writeln!(
                    self.output,
                    "  {GCC_UEFI_CROSS_KEY} = '{}'",
                    config.gcc_uefi_cross_compiler_path()
                )?;
            }
            Err(e) => tracing::warn!("{e}"),
        }

        writeln!(
            self.output,
            "NOTE: if you want to reset the cross-compiler paths, delete the '{HOST_CONFIG_FILE}' file."
        )?;
        Ok(())
    }

    /// Print `prompt` and read one line of input
    fn read_answer(&mut self, prompt: &str) -> Result<String, SetupError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SetupError::InputClosed {
                prompt: prompt.trim_end().to_string(),
            });
        }
        Ok(strip_line_ending(&line).to_string())
    }
}
