//! Draft buffer editing with automatic timestamp tagging.
//!
//! The draft textarea tags each new point with the live playback time:
//! typing the first character of the draft, or the first character after
//! a blank line, inserts `[MM:SS] ` in front of it. Submitting a draft
//! appends a closing tag so the note carries its time range.
//!
//! All cursor positions are character offsets into the new value, the
//! offsets an editing widget reports.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transcript::format_timestamp;

/// Matches a closed `[MM:SS]` tag, exactly two digits on each side.
/// Looser tags (single-digit minutes) are the transcript parser's
/// business, not the note scanner's.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\d{2}):(\d{2})\]").unwrap());

/// Process one edit of the draft buffer, inserting a timestamp tag when
/// the typed character begins a new point.
///
/// `new_value` is the buffer content after the edit and `cursor` the
/// character offset just past the typed character. A new point begins
/// when the cursor sits after the very first character, or when
/// everything before the typed character ends with a blank line. In
/// either case `[MM:SS] ` for the current playback time lands in front
/// of the typed character; otherwise the value passes through unchanged.
pub fn apply_input(new_value: &str, cursor: usize, now: f64) -> String {
    // The typed character sits at cursor-1; with the cursor at 0 or past
    // the end (deletions, programmatic edits) there is nothing to tag.
    if cursor == 0 || cursor > new_value.chars().count() {
        return new_value.to_string();
    }

    let split = byte_offset(new_value, cursor - 1);
    let before = &new_value[..split];

    if cursor != 1 && !before.ends_with("\n\n") {
        return new_value.to_string();
    }

    let tag = format!("[{}] ", format_timestamp(now));
    let mut tagged = String::with_capacity(new_value.len() + tag.len());
    tagged.push_str(before);
    tagged.push_str(&tag);
    tagged.push_str(&new_value[split..]);
    tagged
}

/// All `[MM:SS]` tags in a note, in order of appearance, as seconds.
pub fn scan_tags(text: &str) -> Vec<f64> {
    TAG_RE
        .captures_iter(text)
        .map(|caps| {
            let minutes: f64 = caps[1].parse().unwrap_or(0.0);
            let seconds: f64 = caps[2].parse().unwrap_or(0.0);
            minutes * 60.0 + seconds
        })
        .collect()
}

/// Close a draft for submission by appending the end-of-point tag on its
/// own line.
pub fn finalize(note: &str, end_time: f64) -> String {
    format!("{}\n[{}]", note, format_timestamp(end_time))
}

/// Byte offset of the character at `char_pos`, or the end of the string
/// when the position is past the last character.
fn byte_offset(s: &str, char_pos: usize) -> usize {
    s.char_indices().nth(char_pos).map_or(s.len(), |(i, _)| i)
}
