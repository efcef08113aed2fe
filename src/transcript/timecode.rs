//! Clock string parsing and timestamp formatting.
//!
//! Transcript sources write times in several shapes: `MM:SS`, `H:MM:SS`,
//! or SRT-style `HH:MM:SS,mmm`. The parser here is deliberately lenient -
//! a malformed clock never rejects an otherwise useful transcript, it
//! just reads as zero.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `H:MM:SS` or `MM:SS`, hour group optional.
///
/// Comma-millisecond suffixes (`HH:MM:SS,mmm`) are not part of the match;
/// the comma acts as a boundary and everything after it is ignored.
static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?").unwrap());

/// Parse one half of a subtitle time range into seconds.
///
/// Three digit groups read as hours:minutes:seconds, two groups as
/// minutes:seconds. Input with no recognizable clock at all returns 0.0
/// rather than an error so a single bad line never blocks a whole file.
///
/// Callers must pass only one half of an `" --> "` range; the regex finds
/// the first clock in whatever it is given.
pub fn parse_clock(raw: &str) -> f64 {
    let caps = match CLOCK_RE.captures(raw) {
        Some(caps) => caps,
        None => return 0.0,
    };

    // Group 3 decides the reading: present means the first group is hours,
    // absent means it is minutes.
    match caps.get(3) {
        Some(secs) => {
            let hours: f64 = caps[1].parse().unwrap_or(0.0);
            let minutes: f64 = caps[2].parse().unwrap_or(0.0);
            let seconds: f64 = secs.as_str().parse().unwrap_or(0.0);
            hours * 3600.0 + minutes * 60.0 + seconds
        }
        None => {
            let minutes: f64 = caps[1].parse().unwrap_or(0.0);
            let seconds: f64 = caps[2].parse().unwrap_or(0.0);
            minutes * 60.0 + seconds
        }
    }
}

/// Format a time in seconds as `MM:SS`.
///
/// Fractional seconds are truncated. Minutes are not wrapped at an hour,
/// so long recordings format as e.g. `75:30`.
pub fn format_timestamp(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
