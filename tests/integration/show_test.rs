//! Integration tests for the transcript inspection commands (CLI)

use tempfile::TempDir;

use crate::helpers::{fixtures_dir, run_debrief, temp_fixture};

// ============================================================================
// Show Tests
// ============================================================================

#[test]
fn show_prints_timed_and_inert_lines() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&["show", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[00:00] Welcome everyone to the quarterly review"));
    // The parenthesized token reads the same as a bracketed one.
    assert!(stdout.contains("[02:30] Next topic is the onboarding flow"));
    // Inert lines print indented, without a timestamp.
    assert!(stdout.contains("        No timestamp on this line"));
}

#[test]
fn show_json_emits_the_parsed_segments() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) =
        run_debrief(&["show", path.to_str().unwrap(), "--format", "json"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.trim_start().starts_with('['));
    assert!(stdout.contains("\"start\": 65.0"));
    assert!(stdout.contains("\"text\": \"Discuss pricing for the enterprise tier\""));
}

#[test]
fn show_reads_preparsed_json_transcripts() {
    let path = fixtures_dir().join("segments.json");
    let (stdout, _stderr, exit_code) = run_debrief(&["show", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[01:05] pricing discussion"));
    assert!(stdout.contains("[04:10] wrap up"));
}

#[test]
fn show_reads_json_line_arrays() {
    let path = fixtures_dir().join("lines.json");
    let (stdout, _stderr, exit_code) = run_debrief(&["show", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[00:10] spoken line"));
    assert!(stdout.contains("        plain line"));
    assert!(stdout.contains("[01:30] another topic"));
}

#[test]
fn show_reads_srt_subtitles() {
    let path = fixtures_dir().join("sample.srt");
    let (stdout, _stderr, exit_code) = run_debrief(&["show", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[00:01] Hello and welcome to the call"));
    // Multi-line cue text joins with a space.
    assert!(stdout.contains("[00:05] First agenda item is the pricing change"));
}

#[test]
fn show_finds_files_at_absolute_paths() {
    let (temp_dir, path) = temp_fixture("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&["show", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[01:05]"));
    drop(temp_dir); // Cleanup
}

// ============================================================================
// Info Tests
// ============================================================================

#[test]
fn info_summarizes_the_document() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&["info", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Format:   text"));
    assert!(stdout.contains("Segments: 5 (4 timed, 1 inert)"));
    // Last start 04:10 plus the four second display window.
    assert!(stdout.contains("Duration: 04:14"));
}

#[test]
fn info_reports_srt_duration_from_cue_ends() {
    let path = fixtures_dir().join("sample.srt");
    let (stdout, _stderr, exit_code) = run_debrief(&["info", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Format:   srt"));
    assert!(stdout.contains("Segments: 2 (2 timed, 0 inert)"));
    assert!(stdout.contains("Duration: 00:09"));
}

// ============================================================================
// At Tests
// ============================================================================

#[test]
fn at_names_the_segment_under_a_position() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&["at", path.to_str().unwrap(), "70"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("1  [01:05] Discuss pricing for the enterprise tier"));
}

#[test]
fn at_sticks_to_the_last_segment_past_the_end() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&["at", path.to_str().unwrap(), "9999"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("4  [04:10] Action items and wrap up"));
}

#[test]
fn at_before_the_first_segment_reports_none() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&["at", path.to_str().unwrap(), "--", "-1"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("no current segment"));
}

// ============================================================================
// Excerpt Tests
// ============================================================================

#[test]
fn excerpt_prints_text_in_the_half_open_window() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&[
        "excerpt",
        path.to_str().unwrap(),
        "--from",
        "60",
        "--to",
        "250",
    ]);

    assert_eq!(exit_code, 0);
    // Start 04:10 sits exactly on the exclusive upper bound and is out.
    assert_eq!(
        stdout,
        "Discuss pricing for the enterprise tier\nNext topic is the onboarding flow\n"
    );
}

#[test]
fn excerpt_outside_the_document_is_empty() {
    let path = fixtures_dir().join("sample.txt");
    let (stdout, _stderr, exit_code) = run_debrief(&[
        "excerpt",
        path.to_str().unwrap(),
        "--from",
        "500",
        "--to",
        "600",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\n");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_file_exits_nonzero_with_helpful_error() {
    let (_stdout, stderr, exit_code) = run_debrief(&["show", "nonexistent.txt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("failed to read"));
    assert!(stderr.contains("nonexistent.txt"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("call.docx");
    std::fs::write(&path, "[00:10] text").unwrap();

    let (_stdout, stderr, exit_code) = run_debrief(&["show", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unsupported transcript format"));
    drop(temp_dir);
}

#[test]
fn non_array_json_is_rejected() {
    let path = fixtures_dir().join("invalid.json");
    let (_stdout, stderr, exit_code) = run_debrief(&["show", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid json transcript"));
    assert!(stderr.contains("array"));
}

#[test]
fn show_no_arguments_shows_usage_error() {
    let (_stdout, stderr, exit_code) = run_debrief(&["show"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
    assert!(stderr.contains("<FILE>"));
}
