//! End-to-end tests for the review session through the public API

use debrief::notes::{export_markdown, Category};
use debrief::session::ReviewSession;
use debrief::transform::HttpBackend;

use crate::helpers::load_fixture;

/// Backend whose requests always fail: nothing listens on port 1.
fn dead_backend() -> HttpBackend {
    HttpBackend::new("http://127.0.0.1:1", None).expect("client should build")
}

#[test]
fn full_review_flow_produces_notes_and_markdown() {
    let mut session = ReviewSession::new();
    session
        .load_transcript(&load_fixture("sample.txt"), "sample.txt")
        .expect("fixture should parse");

    assert_eq!(session.document().len(), 5);

    // Play into the second segment and start typing; the draft picks up
    // the live position as its opening tag.
    session.tick(70.0);
    session.draft_input("C", 1);
    assert_eq!(session.draft(), "[01:10] C");

    // Select transcript text and file it under a category.
    session.select_text("Discuss pricing for the enterprise tier");
    session.file_selection(Category::PainPoint);

    let markdown = export_markdown(session.notebook());
    assert!(markdown.contains("## Pain Point"));
    assert!(markdown.contains("- Discuss pricing for the enterprise tier"));
}

#[test]
fn playback_position_drives_the_current_segment() {
    let mut session = ReviewSession::new();
    session
        .load_transcript(&load_fixture("sample.txt"), "sample.txt")
        .expect("fixture should parse");

    assert_eq!(session.tick(0.0), Some(0));
    assert_eq!(session.tick(70.0), Some(1));
    // The inert line after index 2 blocks its upper bound, so nothing
    // is current between that start and the next timed one.
    assert_eq!(session.tick(200.0), None);
    assert_eq!(session.tick(260.0), Some(4));
}

#[test]
fn failed_sends_surface_in_the_outputs_panel() {
    let mut session = ReviewSession::new();
    session
        .load_transcript("[00:00] intro\n[00:10] pricing", "call.txt")
        .expect("transcript should parse");

    session.tick(12.0);
    session.draft_input("n", 1);
    session.submit_draft(&dead_backend());

    assert_eq!(session.draft(), "");
    assert_eq!(session.outputs().len(), 1);
    assert_eq!(session.outputs()[0], "Error sending to LLM");
}

#[test]
fn failed_whole_notebook_transform_records_the_failure_string() {
    let mut session = ReviewSession::new();
    session.select_text("pricing concern");
    session.file_selection(Category::OpenPoint);

    session.transform_all(&dead_backend(), "Rewrite as a summary");
    assert_eq!(
        session.transformed_notes(),
        Some("Failed to fetch transformed notes.")
    );
}

#[test]
fn failed_selection_send_files_the_note_with_a_suffix() {
    let mut session = ReviewSession::new();
    session.select_text("[00:15] pricing concern");
    session.send_selection(&dead_backend());

    assert_eq!(session.notebook().len(), 1);
    assert_eq!(
        session.notebook().notes[0].text,
        "[00:15] pricing concern (Error transforming)"
    );
    assert_eq!(session.selection(), None);
}
