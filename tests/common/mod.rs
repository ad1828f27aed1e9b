//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Test source tree context
///
/// Creates a temporary directory standing in for the ChihuahuaOS tree and
/// provides utilities for setting up test scenarios.
pub struct TestTree {
    /// Temporary directory for the test tree
    pub dir: TempDir,
}

impl TestTree {
    /// Create a new test tree in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test tree directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test tree
    pub fn create_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Check if a file exists in the test tree
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test tree
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run chihuahua-setup in the tree, feeding `input` on stdin
    pub fn run_setup(&self, args: &[&str], input: &str) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_chihuahua-setup"))
            .current_dir(self.path())
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute chihuahua-setup");

        // The child may exit before reading everything, ignore broken pipes
        let mut stdin = child.stdin.take().expect("stdin not captured");
        let _ = stdin.write_all(input.as_bytes());
        drop(stdin);

        child
            .wait_with_output()
            .expect("Failed to wait for chihuahua-setup")
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration written for `/opt/cross` and an empty MinGW path
#[allow(dead_code)]
pub const SAMPLE_HOST_CONFIG: &str = "[constants]\n\
gcc_cross_compiler_path = '/opt/cross/'\n\
gcc_uefi_cross_compiler_path = ''\n";

/// Setup script that records its argument count and then fails
#[allow(dead_code)]
pub const RECORDING_SCRIPT: &str = "#!/bin/bash\n\
echo \"ran with $# args\" >> setup_ran.log\n\
exit 3\n";
