//! SRT subtitle block parsing.
//!
//! Blocks are separated by blank lines; each block carries an index line,
//! a time-range line and one or more text lines. Undersized blocks are
//! dropped silently and malformed clocks read as zero, so a damaged
//! subtitle file still loads as far as it can.

use super::{timecode, Segment};

/// Parse SRT content into segments.
///
/// Splits on blank-line block boundaries. Within a block the index line
/// is ignored whatever it contains, the second line is split on the
/// literal `" --> "` arrow into a start half and an optional end half,
/// and the remaining lines join with a single space as the text. Blocks
/// with fewer than three lines are skipped.
pub fn parse(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for block in content.split("\n\n") {
        let lines: Vec<&str> = block.trim().split('\n').collect();
        if lines.len() < 3 {
            continue;
        }

        let mut halves = lines[1].split(" --> ");
        let start = halves.next().map(timecode::parse_clock).unwrap_or(0.0);
        let end = match halves.next() {
            Some(raw) if !raw.is_empty() => Some(timecode::parse_clock(raw)),
            _ => None,
        };
        let text = lines[2..].join(" ");

        segments.push(Segment {
            start: Some(start),
            end,
            text,
        });
    }

    segments
}
