//! Path map state
//!
//! Pure data consumed by the path map canvas. The application replaces the
//! frame every tick; everything else is set once at startup.

use iced::widget::image;
use pathview_core::map::{MapBounds, CANVAS_MARGIN};
use pathview_core::RenderFrame;

use crate::theme::PathTheme;

/// Canvas edge length in pixels (square map)
pub const DEFAULT_CANVAS_SIZE: f32 = 800.0;

/// Path stroke width in pixels
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Position marker radius in pixels
pub const DEFAULT_MARKER_RADIUS: f32 = 6.0;

#[derive(Debug, Clone)]
pub struct PathMapState {
    /// Background map, `None` until it has finished loading
    pub background: Option<image::Handle>,
    /// Most recent render step output
    pub frame: RenderFrame,
    pub bounds: MapBounds,
    /// Inset on every side of the drawable area
    pub margin: f32,
    pub canvas_size: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    pub theme: PathTheme,
}

impl Default for PathMapState {
    fn default() -> Self {
        Self::new()
    }
}

impl PathMapState {
    pub fn new() -> Self {
        Self {
            background: None,
            frame: RenderFrame::default(),
            bounds: MapBounds::default(),
            margin: CANVAS_MARGIN,
            canvas_size: DEFAULT_CANVAS_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
            theme: PathTheme::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: MapBounds, margin: f32) -> Self {
        self.bounds = bounds;
        self.margin = margin;
        self
    }

    pub fn with_theme(mut self, theme: PathTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Canvas edge length and stroke geometry
    pub fn with_geometry(mut self, canvas_size: f32, line_width: f32, marker_radius: f32) -> Self {
        self.canvas_size = canvas_size.max(1.0);
        self.line_width = line_width.max(0.5);
        self.marker_radius = marker_radius.max(0.0);
        self
    }

    pub fn set_background(&mut self, handle: image::Handle) {
        self.background = Some(handle);
    }

    pub fn set_frame(&mut self, frame: RenderFrame) {
        self.frame = frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_without_background() {
        let state = PathMapState::new();
        assert!(state.background.is_none());
        assert!(state.frame.is_empty());
    }

    #[test]
    fn test_geometry_is_sanitized() {
        let state = PathMapState::new().with_geometry(0.0, 0.0, -3.0);
        assert_eq!(state.canvas_size, 1.0);
        assert_eq!(state.line_width, 0.5);
        assert_eq!(state.marker_radius, 0.0);
    }
}
