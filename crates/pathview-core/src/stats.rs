//! Derived statistics for the displayed time
//!
//! Statistics come from the last actually-reached sample, never the
//! interpolated one. The last-hit highlight is a latched value: it only
//! changes when creep or neutral gold grew between the two most recently
//! reached samples.

use crate::timeline::ReachedSamples;
use crate::types::Sample;

/// Where the most recent last-hit gold came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastHitSource {
    /// No last-hit gold observed yet
    #[default]
    Initial,
    LaneCreep,
    Neutral,
}

/// Sticky last-hit highlight
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightLatch {
    source: LastHitSource,
}

impl HighlightLatch {
    /// Re-evaluate from the two most recently reached samples
    ///
    /// Lane-creep gold wins over neutral gold when both grew. Without a
    /// complete pair, or without any growth, the previous value is kept.
    pub fn update(&mut self, reached: &ReachedSamples) -> LastHitSource {
        if let Some((prev, latest)) = reached.pair() {
            if latest.creep_gold > prev.creep_gold {
                self.source = LastHitSource::LaneCreep;
            } else if latest.neutral_gold > prev.neutral_gold {
                self.source = LastHitSource::Neutral;
            }
        }
        self.source
    }

    pub fn reset(&mut self) {
        self.source = LastHitSource::Initial;
    }
}

/// Cumulative gold split by source, as percentages of the total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldBreakdown {
    pub total: u64,
    pub creep_pct: f64,
    pub neutral_pct: f64,
    pub hero_pct: f64,
}

impl GoldBreakdown {
    /// All percentages are 0 when no gold has been earned
    pub fn from_sample(sample: &Sample) -> Self {
        let total = sample.total_gold();
        if total == 0 {
            return Self {
                total,
                creep_pct: 0.0,
                neutral_pct: 0.0,
                hero_pct: 0.0,
            };
        }

        let pct = |value: u32| value as f64 / total as f64 * 100.0;
        Self {
            total,
            creep_pct: pct(sample.creep_gold),
            neutral_pct: pct(sample.neutral_gold),
            hero_pct: pct(sample.hero_kill_gold),
        }
    }
}

/// Statistics panel contents for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsReadout {
    pub last_hits: u32,
    pub gold: GoldBreakdown,
    pub highlight: LastHitSource,
}

impl StatsReadout {
    pub fn new(sample: &Sample, highlight: LastHitSource) -> Self {
        Self {
            last_hits: sample.last_hits,
            gold: GoldBreakdown::from_sample(sample),
            highlight,
        }
    }

    /// Display rows: `(label, value)` for the three gold sources
    pub fn gold_rows(&self) -> [(&'static str, String); 3] {
        [
            ("Lane creeps", format!("{:.1}%", self.gold.creep_pct)),
            ("Neutrals", format!("{:.1}%", self.gold.neutral_pct)),
            ("Hero kills", format!("{:.1}%", self.gold.hero_pct)),
        ]
    }
}
