//! Test support utilities for pgpeed integration tests.
//!
//! Provides an isolated environment per test and helper commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir, so the config file at
/// `~/.pgpeed/config.toml` never leaks between tests. Child processes get
/// `HOME` and `.current_dir()`; nothing process-global is changed.
pub struct Test {
    /// Working directory for the command
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with an active key pair for [`ALICE`].
    pub fn with_keys() -> Self {
        let t = Self::new();
        let output = t.generate(&ALICE);
        assert!(
            output.status.success(),
            "Failed to generate keys: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Default key directory under the temporary home.
    pub fn default_keys(&self) -> PathBuf {
        self.home.path().join(".pgpeed").join("keys")
    }

    /// Path of the config file under the temporary home.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".pgpeed").join("config.toml")
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }
}
