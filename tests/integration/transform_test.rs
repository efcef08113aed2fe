//! Integration tests for the transform and tag commands (CLI)
//!
//! No transform service runs during tests; these pin down argument
//! handling and the failure surface against an unroutable backend.

use crate::helpers::{fixtures_dir, run_debrief_env};

/// Backend URL nothing listens on; connections fail immediately.
const DEAD_BACKEND: (&str, &str) = ("DEBRIEF_BACKEND_URL", "http://127.0.0.1:1");

#[test]
fn transform_fails_cleanly_when_the_service_is_down() {
    let notes = fixtures_dir().join("notes.txt");
    let (_stdout, stderr, exit_code) = run_debrief_env(
        &[
            "transform",
            notes.to_str().unwrap(),
            "--prompt",
            "Summarize the call",
        ],
        &[DEAD_BACKEND],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("transform service at http://127.0.0.1:1 failed"));
}

#[test]
fn transform_requires_a_prompt() {
    let notes = fixtures_dir().join("notes.txt");
    let (_stdout, stderr, exit_code) =
        run_debrief_env(&["transform", notes.to_str().unwrap()], &[DEAD_BACKEND]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--prompt"));
}

#[test]
fn transform_reports_an_unreadable_notes_file() {
    let (_stdout, stderr, exit_code) = run_debrief_env(
        &["transform", "missing-notes.txt", "--prompt", "Summarize"],
        &[DEAD_BACKEND],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("failed to read missing-notes.txt"));
}

#[test]
fn tag_fails_cleanly_when_the_service_is_down() {
    let (_stdout, stderr, exit_code) = run_debrief_env(
        &["tag", "[00:15] pricing concern", "--timestamp", "00:15"],
        &[DEAD_BACKEND],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("transform service at http://127.0.0.1:1 failed"));
}

#[test]
fn tag_requires_the_selected_text() {
    let (_stdout, stderr, exit_code) = run_debrief_env(&["tag"], &[DEAD_BACKEND]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
}
