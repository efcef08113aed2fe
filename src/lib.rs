//! debrief - review companion for recorded calls
//!
//! Parses call transcripts (plain text, JSON, SRT) into timed segments,
//! tracks which segment is current at any playback position, manages
//! timestamped review notes, and talks to a remote text-transformation
//! backend that rewrites notes into structured summaries.
//!
//! The crate is a library plus a thin CLI binary. The library is organized
//! around the review workflow:
//!
//! - [`transcript`] - transcript parsing into [`transcript::TranscriptDocument`]
//! - [`player`] - playback position tracking and player state
//! - [`notes`] - note taking, draft auto-tagging, markdown export
//! - [`transform`] - HTTP client for the transformation backend
//! - [`session`] - the view-model tying all of the above together
//! - [`config`] - TOML configuration under the user config directory

pub mod cli;
pub mod config;
pub mod logging;
pub mod notes;
pub mod player;
pub mod session;
pub mod transcript;
pub mod transform;

pub use config::Config;
pub use session::ReviewSession;
pub use transcript::{parse_transcript, Format, ParseError, Segment, TranscriptDocument};

/// Version string for display in `--version` and logs.
///
/// Dev builds carry the git SHA and build date; builds with the
/// `release` feature show the clean crate version plus build date.
pub fn version() -> String {
    #[cfg(not(feature = "release"))]
    {
        format!(
            "{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_SHA"),
            env!("DEBRIEF_BUILD_DATE")
        )
    }

    #[cfg(feature = "release")]
    {
        format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("DEBRIEF_BUILD_DATE"))
    }
}
