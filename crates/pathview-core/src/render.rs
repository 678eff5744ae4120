//! Path player: playback state plus the per-frame render step
//!
//! `PathPlayer` owns the sample sequence, the playback state and the sticky
//! last-hit highlight. Each tick advances playback and produces a
//! [`RenderFrame`] describing everything a drawing surface needs: the
//! bucketed path, the interpolated marker, the game-time label and the
//! statistics readout.

use std::time::Duration;

use crate::clock::format_game_time;
use crate::playback::{PlaybackCommand, PlaybackState, SpeedLadder};
use crate::stats::{HighlightLatch, StatsReadout};
use crate::timeline::{PathSegment, SampleSequence};
use crate::types::Sample;

/// Output of one render step
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    /// Raw recorded time the frame was rendered at
    pub time: f64,
    /// Reached path, one polyline per minute bucket
    pub segments: Vec<PathSegment>,
    /// Interpolated position at `time`
    pub marker: Option<Sample>,
    /// Game-time label (`[-]mm:ss`)
    pub clock_label: String,
    pub stats: Option<StatsReadout>,
    sequence: SampleSequence,
}

impl RenderFrame {
    /// Samples of one path segment
    pub fn segment_samples(&self, segment: &PathSegment) -> &[Sample] {
        self.sequence.segment_samples(segment)
    }

    /// Segments paired with their samples, in drawing order
    pub fn polylines(&self) -> impl Iterator<Item = (&PathSegment, &[Sample])> {
        self.segments
            .iter()
            .map(move |seg| (seg, self.sequence.segment_samples(seg)))
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Owner of the sample sequence and playback state
#[derive(Debug, Clone, Default)]
pub struct PathPlayer {
    sequence: SampleSequence,
    playback: PlaybackState,
    highlight: HighlightLatch,
}

impl PathPlayer {
    /// Player with no samples; ticks harmlessly until `load` is called
    pub fn new(speed: SpeedLadder) -> Self {
        Self {
            sequence: SampleSequence::empty(),
            playback: PlaybackState::new(speed),
            highlight: HighlightLatch::default(),
        }
    }

    /// Replace the sequence and rewind to its start
    pub fn load(&mut self, sequence: SampleSequence) {
        let (min_t, max_t) = sequence.time_range().unwrap_or((0.0, 0.0));
        log::info!(
            "PathPlayer::load: {} samples, {:.1}s..{:.1}s",
            sequence.len(),
            min_t,
            max_t
        );
        self.sequence = sequence;
        self.playback.reset_range(min_t, max_t);
        self.highlight.reset();
    }

    pub fn sequence(&self) -> &SampleSequence {
        &self.sequence
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn command(&mut self, command: PlaybackCommand) {
        self.playback.apply(command);
    }

    /// Advance playback by the wall-clock time since the previous frame and
    /// render the result
    pub fn tick(&mut self, elapsed: Duration) -> RenderFrame {
        self.playback.advance(elapsed);
        self.render()
    }

    /// Render at the current playback time
    pub fn render(&mut self) -> RenderFrame {
        let time = self.playback.current_time();

        let marker = self.sequence.sample_at(time);
        if marker.is_none() {
            return RenderFrame {
                time,
                sequence: self.sequence.clone(),
                ..RenderFrame::default()
            };
        }

        let reached = self.sequence.reached(time);
        let highlight = self.highlight.update(&reached);
        let stats = reached
            .latest
            .or(marker)
            .map(|s| StatsReadout::new(&s, highlight));

        RenderFrame {
            time,
            segments: self.sequence.segments(time),
            marker,
            clock_label: format_game_time(time),
            stats,
            sequence: self.sequence.clone(),
        }
    }
}
