//! Test support utilities for kvcreds integration tests.
//!
//! Provides an isolated working directory, command helpers, and a local
//! Key Vault stand-in.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_vault::{MockSecret, MockVault};

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and an empty `PATH` directory,
/// so no real `az` CLI or ambient credentials leak into the run.
/// No process-global state is mutated, so tests can run in parallel.
pub struct Test {
    /// Working directory for the child process
    pub dir: TempDir,
    /// Directory used as the child's PATH
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");

        Self { dir, bin }
    }

    /// Default output file location inside the working directory.
    pub fn default_output(&self) -> PathBuf {
        self.dir.path().join("config").join("credentials.yml")
    }

    /// Read a file relative to the working directory.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    /// Read the default output file.
    pub fn read_output(&self) -> String {
        self.read("config/credentials.yml")
    }
}
