//! Player configuration for pathview-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/pathview-player/config.yaml

use pathview_core::map::{MapBounds, CANVAS_MARGIN};
use pathview_core::playback::{SpeedLadder, DEFAULT_SPEEDS, DEFAULT_SPEED_INDEX};
use pathview_widgets::{
    ThemeColors, DEFAULT_CANVAS_SIZE, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_RADIUS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application name used for the config directory
pub const APP_NAME: &str = "pathview-player";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Input files (map image, sample document)
    pub paths: PathsConfig,
    /// Canvas geometry and map bounds
    pub display: DisplayConfig,
    /// Speed ladder
    pub playback: PlaybackConfig,
    /// Path palette and highlight colors
    pub theme: ThemeColors,
    pub keybindings: KeybindingsConfig,
}

/// Input file locations (relative paths resolve against the working directory)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Background map image
    pub map_image: PathBuf,
    /// Sample document (JSON array of samples)
    pub path_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            map_image: PathBuf::from("dota2_map.png"),
            path_file: PathBuf::from("path_jug_lh_8559667418.json"),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Map canvas edge length in pixels
    pub canvas_size: f32,
    /// Inset of the drawable area on every side
    pub canvas_margin: f32,
    pub marker_radius: f32,
    pub line_width: f32,
    /// World-space landmarks and padding
    pub map_bounds: MapBounds,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            canvas_margin: CANVAS_MARGIN,
            marker_radius: DEFAULT_MARKER_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
            map_bounds: MapBounds::default(),
        }
    }
}

/// Playback configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Allowed multipliers, strictly ascending
    pub speeds: Vec<f64>,
    /// Starting position in `speeds`
    pub default_speed_index: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speeds: DEFAULT_SPEEDS.to_vec(),
            default_speed_index: DEFAULT_SPEED_INDEX,
        }
    }
}

impl PlaybackConfig {
    pub fn speed_ladder(&self) -> SpeedLadder {
        SpeedLadder::new(self.speeds.clone(), self.default_speed_index)
    }
}

/// Keyboard shortcuts, written as "Shift+Ctrl+Alt+KeyName"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub play_pause: Vec<String>,
    pub speed_up: Vec<String>,
    pub speed_down: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            play_pause: vec!["Space".into()],
            speed_up: vec!["Up".into(), "+".into(), "=".into()],
            speed_down: vec!["Down".into(), "-".into()],
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/pathview-player/config.yaml
pub fn default_config_path() -> PathBuf {
    pathview_core::config::default_config_path(APP_NAME)
}
