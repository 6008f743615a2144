//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated home directory so user files never leak into a test
//! - Helpers to write resource, theme and engine files
//! - A command builder with the engine environment cleared

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, also used as `HOME`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder for the optlayer binary.
    ///
    /// `HOME` points at the temporary directory and every `OPTLAYER_*`
    /// variable is cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("optlayer").expect("Failed to find optlayer binary");
        cmd.env("HOME", &self.home)
            .env_remove("OPTLAYER_NAMESPACE")
            .env_remove("OPTLAYER_HELP_PREFIX")
            .env_remove("OPTLAYER_NAME_COLUMN")
            .env_remove("OPTLAYER_ENGINE_CONFIG")
            .env_remove("OPTLAYER_OUTPUT_FORMAT")
            .env_remove("OPTLAYER_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.home
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the default resource file, `~/.config/rofi/config`.
    pub fn write_default_resource_file(&self, content: &str) -> PathBuf {
        self.write_file(".config/rofi/config", content)
    }

    /// Run `get NAME` with extra leading arguments and return stdout.
    pub fn get(&self, args: &[&str], name: &str, options: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .arg("get")
            .arg(name)
            .arg("--")
            .args(options)
            .output()
            .expect("Failed to run optlayer");
        assert!(output.status.success(), "get {name} failed: {output:?}");
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}
