//! Game clock formatting
//!
//! Recorded time starts before the horn; the displayed game time applies a
//! fixed negative offset for the pre-game setup phase.

/// Seconds between recording start and the game clock reading 00:00
pub const GAME_START_OFFSET_SECONDS: f64 = -120.0;

/// Whole game seconds for a raw recorded time
pub fn game_seconds(raw_t: f64) -> i64 {
    (raw_t + GAME_START_OFFSET_SECONDS).floor() as i64
}

/// Format a raw recorded time as signed `mm:ss` game time
///
/// The sign is only shown for negative values; digits use the absolute value.
pub fn format_game_time(raw_t: f64) -> String {
    let total = game_seconds(raw_t);
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}
