//! Flexible line-by-line transcript parsing.
//!
//! Handles plain-text transcripts where each line may carry a `[mm:ss]`
//! or `(mm:ss)` token anywhere in the line. Lines without a token still
//! become segments, just inert ones - they display but never seek.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Segment, DISPLAY_WINDOW_SECS};

/// Matches a bracketed or parenthesized timestamp token: `[m:ss]`,
/// `[mm:ss]`, `(m:ss)` or `(mm:ss)`. Groups 1/2 capture the bracket
/// form, groups 3/4 the parenthesis form.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{1,2}):(\d{2})\]|\((\d{1,2}):(\d{2})\)").unwrap());

/// Parse a whole plain-text transcript.
///
/// Splits on newlines, drops lines that are empty after trimming, and
/// runs every remaining line through [`parse_line`].
pub fn parse(content: &str) -> Vec<Segment> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Parse a single line into a segment.
///
/// The first timestamp token found sets `start` to `minutes*60 + seconds`
/// and `end` to the fixed display window after it; the token itself is
/// removed from the text, which is then trimmed. A line with no token
/// becomes an inert segment holding the trimmed line.
pub fn parse_line(line: &str) -> Segment {
    match TOKEN_RE.captures(line) {
        Some(caps) => {
            // Exactly one alternative matched; the other pair of groups is empty.
            let minutes: f64 = caps
                .get(1)
                .or_else(|| caps.get(3))
                .map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0));
            let seconds: f64 = caps
                .get(2)
                .or_else(|| caps.get(4))
                .map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0));
            let start = minutes * 60.0 + seconds;

            // Splice the matched token out of the line, keep everything else.
            let mut text = String::with_capacity(line.len());
            if let Some(token) = caps.get(0) {
                text.push_str(&line[..token.start()]);
                text.push_str(&line[token.end()..]);
            }

            Segment::timed(start, start + DISPLAY_WINDOW_SECS, text.trim())
        }
        None => Segment::inert(line.trim()),
    }
}
