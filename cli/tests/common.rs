//! # Medi Wizard CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`.
//!
//! Every command loads the user and project configuration, so tests run the
//! binary inside a `Sandbox`: a temporary directory marked as a repository
//! root (which stops the project config search) with an empty user config
//! file selected through `MEDI_WIZARD_CONFIG`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CUSTOM_CATALOG: &str = r#"
[[entries]]
description = "Ear trouble"
specialist = "ENT Specialist"
keywords = ["ear", "hearing", "ringing"]
"#;

/// # Get Medi Wizard Command (`wizard_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `medi-wizard` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn wizard_cmd() -> Command {
    Command::cargo_bin("medi-wizard").expect("Failed to find medi-wizard binary for testing")
}

/// An isolated working directory with its own (empty) user configuration.
pub struct Sandbox {
    dir: TempDir,
    user_config: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        let user_config = dir.path().join("user-config.toml");
        fs::write(&user_config, "").expect("Failed to write user config");
        Self { dir, user_config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `name` inside the sandbox and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    /// Replaces the user configuration file's content.
    pub fn set_user_config(&self, content: &str) {
        fs::write(&self.user_config, content).expect("Failed to write user config");
    }

    /// A `medi-wizard` command running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = wizard_cmd();
        cmd.current_dir(self.dir.path())
            .env("MEDI_WIZARD_CONFIG", &self.user_config)
            .env_remove("MEDI_WIZARD_CATALOG")
            .env_remove("RUST_LOG");
        cmd
    }
}
