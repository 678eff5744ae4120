//! Playback state machine
//!
//! Two effective modes drive `current_time`:
//!
//! - **Playing**: wall-clock time times the speed multiplier advances the
//!   cursor; reaching the end clamps and pauses. The scrub ratio is written
//!   back so the scrub control follows playback.
//! - **Paused**: the scrub ratio drives the cursor.
//!
//! Controls never touch the fields directly; they submit a
//! [`PlaybackCommand`] which is applied before the next frame renders.

mod speed;

pub use speed::{SpeedLadder, DEFAULT_SPEEDS, DEFAULT_SPEED_INDEX};

use std::time::Duration;

/// Discrete requests issued by the transport controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackCommand {
    /// Flip between playing and paused
    TogglePlay,
    /// Scrub control moved (normalized 0.0 to 1.0); ignored while playing
    Scrub(f64),
    SpeedUp,
    SpeedDown,
}

/// Transient playback state owned by the path player
#[derive(Debug, Clone)]
pub struct PlaybackState {
    min_t: f64,
    max_t: f64,
    current_time: f64,
    is_playing: bool,
    scrub_ratio: f64,
    speed: SpeedLadder,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(SpeedLadder::default())
    }
}

impl PlaybackState {
    pub fn new(speed: SpeedLadder) -> Self {
        Self {
            min_t: 0.0,
            max_t: 0.0,
            current_time: 0.0,
            is_playing: false,
            scrub_ratio: 0.0,
            speed,
        }
    }

    /// Reset the cursor to the start of a newly loaded time range
    pub fn reset_range(&mut self, min_t: f64, max_t: f64) {
        let (min_t, max_t) = if min_t <= max_t {
            (min_t, max_t)
        } else {
            (max_t, min_t)
        };
        self.min_t = min_t;
        self.max_t = max_t;
        self.current_time = min_t;
        self.scrub_ratio = 0.0;
        self.is_playing = false;
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn scrub_ratio(&self) -> f64 {
        self.scrub_ratio
    }

    pub fn speed(&self) -> &SpeedLadder {
        &self.speed
    }

    pub fn time_range(&self) -> (f64, f64) {
        (self.min_t, self.max_t)
    }

    /// Label for the play/pause control: the next action available
    pub fn play_pause_label(&self) -> &'static str {
        if self.is_playing {
            "Pause"
        } else {
            "Play"
        }
    }

    /// Apply a control request
    pub fn apply(&mut self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::TogglePlay => {
                self.is_playing = !self.is_playing;
                log::debug!(
                    "playback: {} at {:.2}s",
                    if self.is_playing { "play" } else { "pause" },
                    self.current_time
                );
            }
            PlaybackCommand::Scrub(ratio) => {
                if !self.is_playing {
                    self.scrub_ratio = sanitize_ratio(ratio);
                    self.current_time = self.time_at_ratio(self.scrub_ratio);
                }
            }
            PlaybackCommand::SpeedUp => {
                if self.speed.step_up() {
                    log::debug!("playback: speed {}", self.speed.label());
                }
            }
            PlaybackCommand::SpeedDown => {
                if self.speed.step_down() {
                    log::debug!("playback: speed {}", self.speed.label());
                }
            }
        }
    }

    /// Advance one frame
    ///
    /// Returns true when this tick reached the end and paused playback.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let mut reached_end = false;

        if self.is_playing {
            self.current_time += elapsed.as_secs_f64() * self.speed.speed();
            if self.current_time > self.max_t {
                self.current_time = self.max_t;
                self.is_playing = false;
                reached_end = true;
                log::debug!("playback: reached end at {:.2}s, pausing", self.max_t);
            }
            self.scrub_ratio = self.ratio_at_time(self.current_time);
        } else {
            self.current_time = self.time_at_ratio(self.scrub_ratio);
        }

        self.current_time = self.current_time.clamp(self.min_t, self.max_t);
        reached_end
    }

    fn span(&self) -> f64 {
        self.max_t - self.min_t
    }

    fn time_at_ratio(&self, ratio: f64) -> f64 {
        (self.min_t + ratio * self.span()).clamp(self.min_t, self.max_t)
    }

    fn ratio_at_time(&self, t: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            ((t - self.min_t) / span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}
