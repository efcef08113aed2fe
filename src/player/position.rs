//! Current-segment lookup against the playback clock.
//!
//! Recomputed on every playback tick, so the lookup stays a plain linear
//! scan - cheap for the hundreds to low thousands of segments a call
//! transcript holds, and free of caching that could drift from the
//! document.

use crate::transcript::TranscriptDocument;

/// Index of the segment considered current at playback time `t`.
///
/// Left-to-right first-match scan: the first index `i` whose segment has
/// a start, with `t >= start`, and with either `i` last in the document
/// or `t` below the start of the *positionally* next segment.
///
/// Two consequences of that exact rule are kept deliberately, matching
/// the highlighting behavior this lookup drives:
///
/// - inert segments never match, but one sitting directly after a timed
///   segment makes that segment's upper-bound check false, so a non-final
///   timed segment followed by an inert one is never current;
/// - the scan is first-match, not best-match, so out-of-order or
///   duplicate starts resolve by document position.
///
/// Returns `None` when no segment qualifies, including for `t` before
/// every start and for documents with no timed segments at all.
pub fn current_segment_index(doc: &TranscriptDocument, t: f64) -> Option<usize> {
    let segments = &doc.segments;

    for (i, segment) in segments.iter().enumerate() {
        let start = match segment.start {
            Some(start) => start,
            None => continue,
        };

        if t < start {
            continue;
        }

        let last = i + 1 == segments.len();
        if last || segments[i + 1].start.map_or(false, |next| t < next) {
            return Some(i);
        }
    }

    None
}
