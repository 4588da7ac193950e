#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Returns a `sqlshift` command isolated from any config in the caller's
/// environment or working directory
pub fn sqlshift_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sqlshift").expect("Binary not found");
    cmd.env_remove("SQLSHIFT_CONFIG")
        .env_remove("RUST_LOG")
        .current_dir(std::env::temp_dir());
    cmd
}

/// Writes `content` as `sqlshift.toml` inside a fresh temp dir
pub fn config_dir(content: &str) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("sqlshift.toml"), content).expect("Failed to write config");
    temp_dir
}
