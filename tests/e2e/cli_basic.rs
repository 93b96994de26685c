//! Basic CLI tests for pt
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs.

use assert_cmd::Command;
use predicates::prelude::*;

fn pt() -> Command {
    Command::cargo_bin("pt").unwrap()
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    pt().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("pt"))
        .stdout(predicate::str::contains("Drag page"));
}

#[test]
fn help_short_flag_shows_usage() {
    pt().arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    pt().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_flag_shows_version() {
    pt().arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    pt().arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option: --unknown-option"));
}

#[test]
fn invalid_short_option_returns_exit_code_3() {
    pt().arg("-x")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn positional_argument_is_rejected() {
    pt().arg("Info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn log_without_file_returns_exit_code_3() {
    pt().arg("--log")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--log requires a file path"));
}

// =============================================================================
// Icon Options
// =============================================================================

#[test]
fn icon_flags_are_accepted() {
    pt().args(["--icons", "--help"]).assert().success();
    pt().args(["-i", "--help"]).assert().success();
    pt().args(["--no-icons", "--help"]).assert().success();
}

#[test]
fn help_documents_exit_codes() {
    pt().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES:"))
        .stdout(predicate::str::contains("Invalid arguments"));
}
