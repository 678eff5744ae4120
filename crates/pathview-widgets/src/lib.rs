//! Shared UI widgets for the path viewer
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: Pure data (`PathMapState`)
//! - **View functions**: Take state, return `Element<Message>`
//! - **Canvas Programs**: Handle custom rendering
//!
//! ## Current Features
//!
//! - **Theme**: Minute-bucket path palette, marker and last-hit highlight colors
//! - **Path map**: Background map with the bucket-colored path and position marker

pub mod path_map;
pub mod theme;

pub use theme::{
    parse_hex_color, PathTheme, ThemeColors, DEFAULT_PATH_COLORS, HIGHLIGHT_INITIAL_COLOR,
    HIGHLIGHT_LANE_CREEP_COLOR, HIGHLIGHT_NEUTRAL_COLOR, MARKER_COLOR,
};

pub use path_map::{
    path_map, PathMapState, DEFAULT_CANVAS_SIZE, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_RADIUS,
};
