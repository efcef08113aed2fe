//! Playback position tracking and player state.
//!
//! The playback clock itself belongs to the host media element; what
//! lives here is everything derived from it:
//!
//! - `position`: which transcript segment is current at a given time
//! - `state`: pause provenance, playback rate and clamped seeking
//!
//! Both are pure in-memory state machines driven by discrete events
//! (time updates, keystrokes, selections) from the surrounding shell.

pub mod position;
pub mod state;

pub use position::current_segment_index;
pub use state::{PauseState, PlayerState};
