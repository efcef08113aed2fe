//! Review session view-model.
//!
//! `ReviewSession` owns everything a review surface displays: the
//! transcript document, the notebook, the draft buffer, the player
//! state, the active text selection, transformed outputs and popup
//! visibility. Every discrete event of a review shell maps to one
//! method here; the shell renders state and forwards events, nothing
//! more.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::notes::{apply_input, finalize, scan_tags, Category, NoteBook};
use crate::player::{current_segment_index, PauseState, PlayerState};
use crate::transcript::{parse_transcript, ParseError, TranscriptDocument};
use crate::transform::{note_payload, TransformBackend, SUMMARY_PROMPT};

/// First bracketed timestamp in a selection, 1-2 digit minutes. The
/// whole match, brackets included, anchors the tag-transform request.
static SELECTION_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{1,2}:\d{2})\]").unwrap());

/// Anchor sent when a selection carries no timestamp tag.
const UNTAGGED_ANCHOR: &str = "[00:00]";

/// First bracketed `[m:ss]`/`[mm:ss]` tag in the text, whole match with
/// brackets, or `[00:00]` when none is present. This is the timestamp
/// anchor a tag-transform request carries.
pub fn selection_anchor(text: &str) -> String {
    SELECTION_TAG_RE
        .find(text)
        .map_or(UNTAGGED_ANCHOR.to_string(), |m| m.as_str().to_string())
}

/// A note edit in progress: the note index and the staged text.
struct EditState {
    index: usize,
    text: String,
}

/// The state of one review sitting.
pub struct ReviewSession {
    document: TranscriptDocument,
    book: NoteBook,
    draft: String,
    player: PlayerState,
    selection: Option<String>,
    current_index: Option<usize>,
    edit: Option<EditState>,
    outputs: Vec<String>,
    transformed_notes: Option<String>,
    outputs_open: bool,
}

impl ReviewSession {
    /// Session with default playback tuning and no transcript.
    pub fn new() -> Self {
        Self::with_player(PlayerState::new())
    }

    /// Session around a pre-tuned player.
    pub fn with_player(player: PlayerState) -> Self {
        Self {
            document: TranscriptDocument::default(),
            book: NoteBook::new(),
            draft: String::new(),
            player,
            selection: None,
            current_index: None,
            edit: None,
            outputs: Vec::new(),
            transformed_notes: None,
            outputs_open: false,
        }
    }

    pub fn document(&self) -> &TranscriptDocument {
        &self.document
    }

    pub fn notebook(&self) -> &NoteBook {
        &self.book
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Index of the segment under the playback position, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Transformed notes pushed so far, oldest first.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Result of the last whole-notebook transformation.
    pub fn transformed_notes(&self) -> Option<&str> {
        self.transformed_notes.as_deref()
    }

    pub fn outputs_open(&self) -> bool {
        self.outputs_open
    }

    /// The edit in progress as (note index, staged text).
    pub fn edit_state(&self) -> Option<(usize, &str)> {
        self.edit.as_ref().map(|e| (e.index, e.text.as_str()))
    }

    /// Replaces the transcript wholesale. On error the prior document
    /// stays untouched.
    pub fn load_transcript(&mut self, content: &str, file_name: &str) -> Result<(), ParseError> {
        let document = parse_transcript(content, file_name)?;
        info!(file = %file_name, segments = document.len(), "transcript loaded");
        self.document = document;
        self.refresh_index();
        Ok(())
    }

    /// Advances the playback clock and recomputes the current segment.
    pub fn tick(&mut self, t: f64) -> Option<usize> {
        self.player.tick(t);
        self.refresh_index();
        self.current_index
    }

    /// Stores a text selection and pauses playback while it stands. A
    /// blank selection clears the stored one without touching playback
    /// or the pause provenance, so a later click still resumes without
    /// seeking.
    pub fn select_text(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.selection = None;
            return;
        }
        self.selection = Some(text.to_string());
        if self.player.is_playing() {
            self.player.pause_for_selection();
        }
    }

    /// A click on segment `index`. While paused for a selection the
    /// click only resumes playback, whichever segment was hit.
    /// Otherwise a timed segment seeks to its start and plays; inert
    /// segments never seek.
    pub fn segment_clicked(&mut self, index: usize) {
        if self.player.pause == PauseState::PausedForSelection {
            self.player.resume();
            return;
        }
        let start = self.document.segments.get(index).and_then(|s| s.start);
        if let Some(start) = start {
            self.player.seek_to(start);
            self.player.resume();
            self.refresh_index();
        }
    }

    pub fn toggle_rate(&mut self) {
        self.player.toggle_rate();
    }

    pub fn begin_hold_rate(&mut self) {
        self.player.begin_hold_rate();
    }

    pub fn end_hold_rate(&mut self) {
        self.player.end_hold_rate();
    }

    pub fn toggle_typing_pause(&mut self) {
        self.player.toggle_typing_pause();
    }

    pub fn skip_back(&mut self) {
        self.player.skip_back();
        self.refresh_index();
    }

    pub fn skip_forward(&mut self) {
        self.player.skip_forward();
        self.refresh_index();
    }

    /// One edit of the draft buffer; a character that begins a new
    /// point picks up a tag for the live playback position.
    pub fn draft_input(&mut self, new_value: &str, cursor: usize) {
        self.draft = apply_input(new_value, cursor, self.player.position);
    }

    /// Submits the draft: closes it with an end tag and sends it along
    /// with the transcript excerpt it covers. A blank draft is ignored;
    /// a draft whose tags all fail to scan sends nothing. The draft
    /// clears once submitted, sent or not.
    pub fn submit_draft(&mut self, backend: &dyn TransformBackend) {
        if self.draft.trim().is_empty() {
            return;
        }
        let end_time = self.player.position.floor();
        let full = finalize(&self.draft, end_time);
        self.send_note(backend, &full, end_time);
        self.draft.clear();
    }

    fn send_note(&mut self, backend: &dyn TransformBackend, note: &str, end_time: f64) {
        let tags = scan_tags(note);
        if tags.is_empty() {
            return;
        }
        let start = tags.iter().copied().fold(f64::INFINITY, f64::min);
        let excerpt = self.document.excerpt(start, end_time);
        debug!(start, end_time, "sending draft for transformation");
        let output = match backend.transform_notes(SUMMARY_PROMPT, &note_payload(note, &excerpt)) {
            Ok(Some(text)) => text,
            Ok(None) => "No response".to_string(),
            Err(e) => {
                debug!(error = %e, "draft transformation failed");
                "Error sending to LLM".to_string()
            }
        };
        self.outputs.push(output);
    }

    /// Sends the current selection for tag transformation and files the
    /// result as a note. A missing response field files the selection
    /// unchanged; a transport failure files it with an error suffix.
    /// The selection clears whatever the outcome.
    pub fn send_selection(&mut self, backend: &dyn TransformBackend) {
        let selection = match &self.selection {
            Some(s) if !s.trim().is_empty() => s.clone(),
            _ => return,
        };
        let timestamp = selection_anchor(&selection);
        let note = match backend.tag_transform(&selection, &timestamp) {
            Ok(Some(text)) => text,
            Ok(None) => selection.clone(),
            Err(e) => {
                debug!(error = %e, "selection transformation failed");
                format!("{} (Error transforming)", selection)
            }
        };
        self.book.push(note);
        self.selection = None;
    }

    /// Files the selection under a category. The stored selection is
    /// not cleared.
    pub fn file_selection(&mut self, category: Category) {
        if let Some(selection) = &self.selection {
            self.book.push_categorized(selection.clone(), category);
        }
    }

    /// Compiles the whole notebook and sends it for transformation
    /// under the given prompt, recording the displayed result.
    pub fn transform_all(&mut self, backend: &dyn TransformBackend, prompt: &str) {
        let compiled = self.book.compile();
        let result = match backend.transform_notes(prompt, &compiled) {
            Ok(Some(text)) => text,
            Ok(None) => "No response.".to_string(),
            Err(e) => {
                debug!(error = %e, "notebook transformation failed");
                "Failed to fetch transformed notes.".to_string()
            }
        };
        self.transformed_notes = Some(result);
    }

    /// Starts editing note `index`, staging its current text.
    pub fn begin_edit(&mut self, index: usize) {
        if let Some(note) = self.book.notes.get(index) {
            self.edit = Some(EditState {
                index,
                text: note.text.clone(),
            });
        }
    }

    /// Replaces the staged edit text.
    pub fn edit_in_progress(&mut self, text: &str) {
        if let Some(edit) = &mut self.edit {
            edit.text = text.to_string();
        }
    }

    /// Writes the staged text back to its note, even when empty.
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            self.book.edit(edit.index, edit.text);
        }
    }

    /// Drops the staged edit without touching the note.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn open_outputs(&mut self) {
        self.outputs_open = true;
    }

    pub fn close_outputs(&mut self) {
        self.outputs_open = false;
    }

    fn refresh_index(&mut self) {
        self.current_index = current_segment_index(&self.document, self.player.position);
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}
