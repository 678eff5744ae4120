//! Playback speed ladder

/// Allowed playback multipliers, ascending
pub const DEFAULT_SPEEDS: [f64; 8] = [0.5, 1.0, 1.5, 2.0, 4.0, 8.0, 16.0, 32.0];

/// Index of 1x in `DEFAULT_SPEEDS`
pub const DEFAULT_SPEED_INDEX: usize = 1;

/// Fixed ascending list of multipliers with a current position
///
/// Stepping clamps at both ends; there is no wraparound.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedLadder {
    speeds: Vec<f64>,
    index: usize,
}

impl Default for SpeedLadder {
    fn default() -> Self {
        Self {
            speeds: DEFAULT_SPEEDS.to_vec(),
            index: DEFAULT_SPEED_INDEX,
        }
    }
}

impl SpeedLadder {
    /// Build a ladder from configured speeds
    ///
    /// Falls back to `DEFAULT_SPEEDS` when the list is empty, not strictly
    /// ascending, or contains non-positive/non-finite values. The starting
    /// index is clamped into the list.
    pub fn new(speeds: Vec<f64>, index: usize) -> Self {
        let valid = !speeds.is_empty()
            && speeds.iter().all(|s| s.is_finite() && *s > 0.0)
            && speeds.windows(2).all(|w| w[0] < w[1]);

        let speeds = if valid {
            speeds
        } else {
            log::warn!(
                "SpeedLadder::new: invalid speed list {:?}, using defaults",
                speeds
            );
            DEFAULT_SPEEDS.to_vec()
        };

        let index = index.min(speeds.len() - 1);
        Self { speeds, index }
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current multiplier
    pub fn speed(&self) -> f64 {
        self.speeds[self.index]
    }

    /// Move one step faster; returns false when already at the top
    pub fn step_up(&mut self) -> bool {
        if self.index + 1 < self.speeds.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move one step slower; returns false when already at the bottom
    pub fn step_down(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Control label, e.g. `"1x"`, `"0.5x"`
    pub fn label(&self) -> String {
        format!("{}x", self.speed())
    }
}
