//! Player state management.
//!
//! Contains the central `PlayerState` struct mirroring the host media
//! element: playback position, rate and pause state, plus the keyboard
//! shortcuts that act on them. The actual clock advance happens in the
//! media element; this state machine reacts to its events.

/// Why playback is currently not running.
///
/// Pauses carry their provenance because resuming depends on it: a
/// selection pause ends on the next transcript click, a typing pause
/// ends on the next typing toggle, and neither interferes with the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
    /// Playback is running
    Running,
    /// Paused without a tracked reason
    Paused,
    /// Paused because transcript text is selected
    PausedForSelection,
    /// Paused for note typing
    PausedForTyping,
}

/// Normal playback rate.
pub const NORMAL_RATE: f64 = 1.0;

/// Default fast playback rate (rate toggle and hold-to-fast-forward).
pub const DEFAULT_FAST_RATE: f64 = 2.0;

/// Default relative skip distance in seconds.
pub const DEFAULT_SKIP_SECS: f64 = 10.0;

/// Central playback state for a review session.
#[derive(Debug)]
pub struct PlayerState {
    /// Current playback position in seconds
    pub position: f64,
    /// Media duration, unknown until the host element reports it
    pub duration: Option<f64>,
    /// Current playback rate
    pub rate: f64,
    /// Rate used by the fast toggle and the hold gesture
    pub fast_rate: f64,
    /// Relative skip distance in seconds
    pub skip_secs: f64,
    /// Pause state with provenance
    pub pause: PauseState,
    /// Whether the current fast rate came from holding the modifier
    pub rate_from_hold: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// Create a player at rest with default tuning.
    pub fn new() -> Self {
        Self::with_tuning(DEFAULT_SKIP_SECS, DEFAULT_FAST_RATE)
    }

    /// Create a player with configured skip distance and fast rate.
    pub fn with_tuning(skip_secs: f64, fast_rate: f64) -> Self {
        Self {
            position: 0.0,
            duration: None,
            rate: NORMAL_RATE,
            fast_rate,
            skip_secs,
            pause: PauseState::Running,
            rate_from_hold: false,
        }
    }

    /// Whether playback is currently running.
    pub fn is_playing(&self) -> bool {
        self.pause == PauseState::Running
    }

    /// Record a playback-time update from the media element.
    pub fn tick(&mut self, t: f64) {
        self.position = t;
    }

    /// Flip between normal and fast rate.
    ///
    /// Any hold provenance is cleared: after an explicit toggle the
    /// modifier release no longer restores the previous rate.
    pub fn toggle_rate(&mut self) {
        self.rate = if self.rate == NORMAL_RATE {
            self.fast_rate
        } else {
            NORMAL_RATE
        };
        self.rate_from_hold = false;
    }

    /// Force the fast rate while the modifier is held.
    ///
    /// Called once the hold threshold has elapsed; the threshold timer
    /// itself lives with the caller.
    pub fn begin_hold_rate(&mut self) {
        self.rate = self.fast_rate;
        self.rate_from_hold = true;
    }

    /// Release the hold gesture.
    ///
    /// Restores the normal rate only if the hold set the current rate;
    /// a rate reached through the explicit toggle stays.
    pub fn end_hold_rate(&mut self) {
        if self.rate_from_hold {
            self.rate = NORMAL_RATE;
            self.rate_from_hold = false;
        }
    }

    /// Seek to an absolute position, clamped to `[0, duration]`.
    ///
    /// With no known duration the upper clamp is skipped.
    pub fn seek_to(&mut self, t: f64) {
        let mut t = t.max(0.0);
        if let Some(duration) = self.duration {
            t = t.min(duration);
        }
        self.position = t;
    }

    /// Skip backwards by the configured distance.
    pub fn skip_back(&mut self) {
        self.seek_to(self.position - self.skip_secs);
    }

    /// Skip forwards by the configured distance.
    pub fn skip_forward(&mut self) {
        self.seek_to(self.position + self.skip_secs);
    }

    /// Pause because transcript text was selected.
    pub fn pause_for_selection(&mut self) {
        self.pause = PauseState::PausedForSelection;
    }

    /// Pause without a tracked reason.
    pub fn pause(&mut self) {
        self.pause = PauseState::Paused;
    }

    /// Resume playback regardless of why it was paused.
    pub fn resume(&mut self) {
        self.pause = PauseState::Running;
    }

    /// Toggle the typing pause.
    ///
    /// Only two transitions exist: running pauses for typing, and a
    /// typing pause resumes. Pauses owned by a selection or by the host
    /// controls are left alone so they keep their own resume paths.
    pub fn toggle_typing_pause(&mut self) {
        match self.pause {
            PauseState::Running => self.pause = PauseState::PausedForTyping,
            PauseState::PausedForTyping => self.pause = PauseState::Running,
            PauseState::Paused | PauseState::PausedForSelection => {}
        }
    }
}
