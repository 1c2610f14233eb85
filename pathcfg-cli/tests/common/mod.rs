//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for both binaries
//! - Fixtures for the bootstrap source script

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated scratch directory.
///
/// This struct provides:
/// - A temporary directory used as the working directory for `abspath`
/// - A configuration root for `nvim-setup` (not created yet)
/// - A source script location for `nvim-setup` (not created yet)
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
    /// Configuration root handed to nvim-setup
    pub config_root: PathBuf,
    /// Source script handed to nvim-setup
    pub source: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The temporary path is canonicalized so that it matches what the
    /// binaries see as their current directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let config_root = temp_path.join("config");
        let source = temp_path.join("dotfiles").join("init.lua");

        Self {
            temp_dir,
            temp_path,
            config_root,
            source,
        }
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the source script so the installer's precondition holds.
    pub fn create_source(&self) {
        std::fs::create_dir_all(self.source.parent().unwrap())
            .expect("Failed to create source directory");
        std::fs::write(&self.source, "vim.opt.number = true\n")
            .expect("Failed to write source script");
    }

    /// Where nvim-setup writes the bootstrap file.
    pub fn dest_file(&self) -> PathBuf {
        self.config_root.join("nvim").join("init.lua")
    }

    /// An `abspath` command running inside the temp directory.
    pub fn abspath(&self) -> Command {
        let mut cmd = Command::cargo_bin("abspath").expect("Failed to find abspath binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("PATHCFG_LOG_MODE");
        cmd
    }

    /// A bare `nvim-setup` command with no overrides and a clean environment.
    pub fn nvim_setup_bare(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("nvim-setup").expect("Failed to find nvim-setup binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("NVIM_SETUP_SOURCE");
        cmd.env_remove("NVIM_SETUP_CONFIG_ROOT");
        cmd.env_remove("PATHCFG_LOG_MODE");
        cmd
    }

    /// An `nvim-setup` command with the source and config root pre-configured.
    pub fn nvim_setup(&self) -> Command {
        let mut cmd = self.nvim_setup_bare();
        cmd.arg("--source")
            .arg(&self.source)
            .arg("--config-root")
            .arg(&self.config_root);
        cmd
    }

    /// The expected bootstrap file content for this environment.
    pub fn expected_directive(&self) -> String {
        format!("dofile('{}')\n", self.source.display())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Split command output into lines.
#[allow(dead_code)]
pub fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec())
        .expect("Invalid UTF-8 in output")
        .lines()
        .map(str::to_string)
        .collect()
}
