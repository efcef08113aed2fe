//! Integration tests for the top-level CLI surface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{run_debrief, run_debrief_env};

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn help_lists_every_subcommand() {
    let (stdout, _stderr, exit_code) = run_debrief(&["--help"]);

    assert_eq!(exit_code, 0);
    for subcommand in [
        "show",
        "info",
        "at",
        "excerpt",
        "compile",
        "transform",
        "tag",
        "config",
        "completions",
    ] {
        assert!(
            stdout.contains(subcommand),
            "help should mention {subcommand}"
        );
    }
}

#[test]
fn show_help_describes_the_command() {
    let (stdout, _stderr, exit_code) = run_debrief(&["show", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Parse a transcript"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("<FILE>"));
}

#[test]
fn version_flag_prints_the_crate_version() {
    Command::cargo_bin("debrief")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_2() {
    Command::cargo_bin("debrief")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_points_at_the_app_file() {
    let temp_dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_debrief_env(
        &["config", "path"],
        &[("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap())],
    );

    assert_eq!(exit_code, 0);
    let path = stdout.trim();
    assert!(path.ends_with("config.toml"), "got: {path}");
    assert!(path.contains("debrief"));
    drop(temp_dir);
}

#[test]
fn config_show_prints_effective_toml() {
    let temp_dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_debrief_env(
        &["config", "show"],
        &[("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap())],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[backend]"));
    assert!(stdout.contains("url ="));
    assert!(stdout.contains("[playback]"));
    assert!(stdout.contains("[logging]"));
    drop(temp_dir);
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_emit_the_binary_name() {
    let (stdout, _stderr, exit_code) = run_debrief(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("debrief"));
    assert!(stdout.contains("_debrief"));
}

#[test]
fn completions_reject_an_unknown_shell() {
    let (_stdout, stderr, exit_code) = run_debrief(&["completions", "tcsh"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid value"));
}
