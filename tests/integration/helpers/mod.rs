//! Shared helpers for CLI integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to a file under tests/fixtures, as a string argument.
pub fn fixture_arg(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// An intelcard command isolated from the user's home config.
///
/// The returned TempDir is the fake home and must outlive the command.
pub fn intelcard() -> (Command, TempDir) {
    let home = TempDir::new().expect("Failed to create temp home");
    let mut cmd = Command::cargo_bin("intelcard").expect("intelcard binary not built");
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("INTELCARD_LOG");
    (cmd, home)
}
