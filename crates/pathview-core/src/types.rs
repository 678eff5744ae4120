//! Core data types

use serde::{Deserialize, Serialize};

/// Seconds per minute bucket used to split and color the path
pub const BUCKET_SECONDS: f64 = 60.0;

/// One recorded observation of the tracked hero
///
/// Serialized with the camelCase keys used by the path extractor:
/// `{"t", "x", "y", "lastHits", "creepGold", "neutralGold", "heroKillGold"}`.
/// Counters missing from a record default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Elapsed seconds since recording start
    pub t: f64,
    /// World X (map units)
    pub x: f64,
    /// World Y (map units)
    pub y: f64,
    #[serde(default)]
    pub last_hits: u32,
    /// Cumulative gold from lane creep kills
    #[serde(default)]
    pub creep_gold: u32,
    /// Cumulative gold from neutral creep kills
    #[serde(default)]
    pub neutral_gold: u32,
    /// Cumulative gold from hero kills
    #[serde(default)]
    pub hero_kill_gold: u32,
}

impl Sample {
    /// Minute bucket this sample belongs to (`floor(t / 60)`)
    pub fn minute_bucket(&self) -> i64 {
        (self.t / BUCKET_SECONDS).floor() as i64
    }

    /// Sum of all gold-by-source counters
    pub fn total_gold(&self) -> u64 {
        self.creep_gold as u64 + self.neutral_gold as u64 + self.hero_kill_gold as u64
    }
}

/// A point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl From<&Sample> for WorldPoint {
    fn from(sample: &Sample) -> Self {
        Self {
            x: sample.x,
            y: sample.y,
        }
    }
}
