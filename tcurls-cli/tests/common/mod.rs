//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary directory for fixtures
//! - Command builders isolated from the caller's environment
//! - Fixture helpers

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const LEGACY_ROOT: &str = "https://taskcluster.net";
pub const GENERIC_ROOT: &str = "https://tc.example.com";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Get a command builder with no root URL and default logging.
    ///
    /// Variables inherited from the developer's shell are removed so tests
    /// never depend on them.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tcurls").expect("Failed to find tcurls binary");
        cmd.env_remove("TASKCLUSTER_ROOT_URL")
            .env_remove("TCURLS_LOG_MODE")
            .current_dir(self.temp_dir.path());
        cmd
    }

    /// Get a command builder with `--root-url` set.
    pub fn command_with_root(&self, root_url: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--root-url").arg(root_url);
        cmd
    }

    /// Run `tcurls url` and return the printed URL.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn url(&self, root_url: &str, args: &[&str]) -> String {
        let output = self
            .command_with_root(root_url)
            .arg("url")
            .args(args)
            .output()
            .expect("Failed to run url command");

        assert!(
            output.status.success(),
            "url failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }

    /// Write a fixture file into the temporary directory.
    pub fn write_fixture(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }
}

/// Path to the shared conformance fixture shipped with the library crate.
#[allow(dead_code)]
pub fn shared_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("tcurls")
        .join("tests")
        .join("fixtures")
        .join("specification.yml")
}
