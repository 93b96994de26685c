//! Config file and environment tests for pt

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pt() -> Command {
    Command::cargo_bin("pt").unwrap()
}

// =============================================================================
// Help Output Contains Config File Info
// =============================================================================

#[test]
fn help_shows_config_file_section() {
    pt().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CONFIG FILE:"))
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("theme.toml"));
}

#[test]
fn help_shows_environment_section() {
    pt().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PAGETABS_ICONS"))
        .stdout(predicate::str::contains("PAGETABS_LOG"));
}

// =============================================================================
// Explicit --config
// =============================================================================

#[test]
fn missing_config_file_returns_exit_code_3() {
    pt().args(["--config", "/nonexistent/pagetabs/config.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn invalid_config_file_returns_exit_code_3() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut file = fs::File::create(&config_path).unwrap();
    writeln!(file, "invalid {{ toml").unwrap();

    pt().arg("--config")
        .arg(&config_path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn config_without_path_returns_exit_code_3() {
    pt().arg("--config")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--config requires a file path"));
}

// =============================================================================
// Default location (without TUI)
// =============================================================================

#[test]
fn broken_default_config_does_not_crash() {
    // The default location falls back to built-in settings on parse errors
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".config").join("pagetabs");
    fs::create_dir_all(&config_dir).unwrap();
    let mut file = fs::File::create(config_dir.join("config.toml")).unwrap();
    writeln!(file, "invalid {{ toml").unwrap();

    pt().env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join(".config"))
        .arg("--help")
        .assert()
        .success();
}
