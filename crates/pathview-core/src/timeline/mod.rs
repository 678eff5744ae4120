//! Sample sequence and time-to-sample mapping
//!
//! A `SampleSequence` is loaded once per viewing session and never changes
//! afterwards. All queries take a target time and answer from the sorted
//! samples with binary search:
//!
//! - [`SampleSequence::sample_at`]: interpolated state at an arbitrary time
//! - [`SampleSequence::reached`]: the last two samples with `t <= target`
//! - [`SampleSequence::segments`]: the reached path split by minute bucket

mod reached;
mod segments;

pub use reached::ReachedSamples;
pub use segments::PathSegment;

use crate::types::Sample;
use std::sync::Arc;

/// Immutable, time-ordered sequence of samples
///
/// Cloning is cheap (shared storage), so a sequence can be handed to UI
/// messages and render frames without copying the samples.
#[derive(Debug, Clone, Default)]
pub struct SampleSequence {
    samples: Arc<[Sample]>,
}

impl SampleSequence {
    /// Build a sequence from decoded samples
    ///
    /// Out-of-order input is stably sorted by `t` (with a warning) before the
    /// sequence is frozen; equal timestamps keep their document order.
    pub fn new(mut samples: Vec<Sample>) -> Self {
        let ordered = samples.windows(2).all(|w| w[0].t <= w[1].t);
        if !ordered {
            log::warn!(
                "SampleSequence::new: {} samples not ordered by time, sorting",
                samples.len()
            );
            samples.sort_by(|a, b| a.t.total_cmp(&b.t));
        }
        Self {
            samples: samples.into(),
        }
    }

    /// Sequence with no samples (playback stays inert)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// `(minT, maxT)`, or `None` for an empty sequence
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((self.first()?.t, self.last()?.t))
    }

    /// Number of samples with `t <= target`
    pub fn reached_count(&self, target: f64) -> usize {
        self.samples.partition_point(|s| s.t <= target)
    }

    /// Instantaneous state at `t`
    ///
    /// Position is linearly interpolated between the surrounding samples;
    /// counters come from the most recently reached sample. Times outside the
    /// recorded range clamp to the first/last sample, returned unchanged.
    pub fn sample_at(&self, t: f64) -> Option<Sample> {
        let first = self.first()?;
        let last = self.last()?;

        if t.is_nan() || t <= first.t {
            return Some(*first);
        }
        if t >= last.t {
            return Some(*last);
        }

        // first.t < t < last.t, so 1 <= idx <= len - 1
        let idx = self.reached_count(t);
        let s1 = &self.samples[idx - 1];
        let s2 = &self.samples[idx];

        let span = s2.t - s1.t;
        let alpha = if span > 0.0 { (t - s1.t) / span } else { 0.0 };

        Some(Sample {
            t,
            x: s1.x + alpha * (s2.x - s1.x),
            y: s1.y + alpha * (s2.y - s1.y),
            ..*s1
        })
    }

    /// The two most recently reached samples at `target`
    pub fn reached(&self, target: f64) -> ReachedSamples {
        ReachedSamples::from_prefix(&self.samples[..self.reached_count(target)])
    }

    /// Reached path split into per-minute-bucket polylines
    pub fn segments(&self, target: f64) -> Vec<PathSegment> {
        segments::split_by_bucket(&self.samples[..self.reached_count(target)])
    }

    /// Samples covered by a segment
    pub fn segment_samples(&self, segment: &PathSegment) -> &[Sample] {
        self.samples.get(segment.range.clone()).unwrap_or(&[])
    }
}

#[cfg(test)]
pub(crate) fn sample(t: f64, x: f64, y: f64) -> Sample {
    Sample {
        t,
        x,
        y,
        last_hits: 0,
        creep_gold: 0,
        neutral_gold: 0,
        hero_kill_gold: 0,
    }
}
