//! Colors for the path map and statistics panel
//!
//! Colors can be overridden through the `theme` section of the player
//! config as hex strings (`"#RRGGBB"`); `PathTheme` is the resolved form.

use iced::Color;
use pathview_core::stats::LastHitSource;
use pathview_core::timeline::PathSegment;
use serde::{Deserialize, Serialize};

/// Minute-bucket path palette (bucket mod 6)
pub const DEFAULT_PATH_COLORS: [Color; 6] = [
    Color::from_rgb(0.0, 1.0, 0.6),      // #00ff99
    Color::from_rgb(0.0, 0.737, 0.831),  // #00bcd4
    Color::from_rgb(1.0, 0.922, 0.231),  // #ffeb3b
    Color::from_rgb(1.0, 0.596, 0.0),    // #ff9800
    Color::from_rgb(0.957, 0.263, 0.212), // #f44336
    Color::from_rgb(0.612, 0.153, 0.69), // #9c27b0
];

/// Current position marker (#ff4444)
pub const MARKER_COLOR: Color = Color::from_rgb(1.0, 0.267, 0.267);

/// Last hit before any gold was earned (#ffeb3b)
pub const HIGHLIGHT_INITIAL_COLOR: Color = Color::from_rgb(1.0, 0.922, 0.231);

/// Latest last-hit gold came from lane creeps (#8cff66)
pub const HIGHLIGHT_LANE_CREEP_COLOR: Color = Color::from_rgb(0.549, 1.0, 0.4);

/// Latest last-hit gold came from neutrals (#66d9ff)
pub const HIGHLIGHT_NEUTRAL_COLOR: Color = Color::from_rgb(0.4, 0.851, 1.0);

/// Hex color configuration, as stored in YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub path: Vec<String>,
    pub marker: String,
    pub highlight_initial: String,
    pub highlight_lane_creep: String,
    pub highlight_neutral: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            path: ["#00ff99", "#00bcd4", "#ffeb3b", "#ff9800", "#f44336", "#9c27b0"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            marker: "#ff4444".to_string(),
            highlight_initial: "#ffeb3b".to_string(),
            highlight_lane_creep: "#8cff66".to_string(),
            highlight_neutral: "#66d9ff".to_string(),
        }
    }
}

/// Resolved colors used while drawing
#[derive(Debug, Clone, PartialEq)]
pub struct PathTheme {
    pub path_colors: Vec<Color>,
    pub marker: Color,
    pub highlight_initial: Color,
    pub highlight_lane_creep: Color,
    pub highlight_neutral: Color,
}

impl Default for PathTheme {
    fn default() -> Self {
        Self {
            path_colors: DEFAULT_PATH_COLORS.to_vec(),
            marker: MARKER_COLOR,
            highlight_initial: HIGHLIGHT_INITIAL_COLOR,
            highlight_lane_creep: HIGHLIGHT_LANE_CREEP_COLOR,
            highlight_neutral: HIGHLIGHT_NEUTRAL_COLOR,
        }
    }
}

impl From<&ThemeColors> for PathTheme {
    fn from(colors: &ThemeColors) -> Self {
        let path_colors = if colors.path.is_empty() {
            log::warn!("PathTheme: empty path palette, using defaults");
            DEFAULT_PATH_COLORS.to_vec()
        } else {
            colors.path.iter().map(|hex| parse_hex_color(hex)).collect()
        };

        Self {
            path_colors,
            marker: parse_hex_color(&colors.marker),
            highlight_initial: parse_hex_color(&colors.highlight_initial),
            highlight_lane_creep: parse_hex_color(&colors.highlight_lane_creep),
            highlight_neutral: parse_hex_color(&colors.highlight_neutral),
        }
    }
}

impl PathTheme {
    /// Stroke color for a path segment
    pub fn segment_color(&self, segment: &PathSegment) -> Color {
        self.path_colors
            .get(segment.color_index(self.path_colors.len()))
            .copied()
            .unwrap_or(Color::WHITE)
    }

    /// Color of the last-hit line in the statistics panel
    pub fn highlight_color(&self, source: LastHitSource) -> Color {
        match source {
            LastHitSource::Initial => self.highlight_initial,
            LastHitSource::LaneCreep => self.highlight_lane_creep,
            LastHitSource::Neutral => self.highlight_neutral,
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns white on parse failure
pub fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::from_rgb8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#FF0000");
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);

        let color = parse_hex_color("00ff00");
        assert_eq!(color.g, 1.0);

        assert_eq!(parse_hex_color("#12"), Color::WHITE);
        assert_eq!(parse_hex_color("#ééé"), Color::WHITE);
    }

    #[test]
    fn test_segment_color_cycles_palette() {
        let theme = PathTheme::default();
        let seg = |bucket| PathSegment { bucket, range: 0..1 };
        assert_eq!(theme.segment_color(&seg(0)), DEFAULT_PATH_COLORS[0]);
        assert_eq!(theme.segment_color(&seg(6)), DEFAULT_PATH_COLORS[0]);
        assert_eq!(theme.segment_color(&seg(9)), DEFAULT_PATH_COLORS[3]);
    }

    #[test]
    fn test_highlight_colors_from_config() {
        let theme = PathTheme::from(&ThemeColors::default());
        assert_eq!(theme.path_colors.len(), 6);
        assert_eq!(
            theme.highlight_color(LastHitSource::LaneCreep),
            Color::from_rgb8(0x8c, 0xff, 0x66)
        );
        assert_eq!(
            theme.highlight_color(LastHitSource::Neutral),
            Color::from_rgb8(0x66, 0xd9, 0xff)
        );
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let colors = ThemeColors {
            path: Vec::new(),
            ..ThemeColors::default()
        };
        let theme = PathTheme::from(&colors);
        assert_eq!(theme.path_colors, DEFAULT_PATH_COLORS.to_vec());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let colors = ThemeColors {
            marker: "#00FFFF".to_string(),
            ..ThemeColors::default()
        };
        let yaml = serde_yaml::to_string(&colors).unwrap();
        let parsed: ThemeColors = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, colors);
    }
}
