//! World-to-canvas projection
//!
//! World coordinates live in a square spanning the two respawn landmarks
//! (`BASE_MIN`, `BASE_MAX`), padded by 5% of that span on each side so points
//! near the map edge are not clipped. The drawable area is the canvas inset
//! by a fixed margin; the vertical axis is inverted (world "up" is smaller
//! canvas Y) and every projected point is clamped into the inset rectangle.

use crate::types::WorldPoint;
use serde::{Deserialize, Serialize};

/// Lower respawn landmark (world units, both axes)
pub const BASE_MIN: f64 = 9684.0;

/// Upper respawn landmark (world units, both axes)
pub const BASE_MAX: f64 = 23034.0;

/// Padding added on each side, as a fraction of the landmark span
pub const PADDING_RATIO: f64 = 0.05;

/// Canvas inset in pixels on every side
pub const CANVAS_MARGIN: f32 = 20.0;

/// Logical map square, derived from the landmarks plus padding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapBounds {
    pub base_min: f64,
    pub base_max: f64,
    pub padding_ratio: f64,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            base_min: BASE_MIN,
            base_max: BASE_MAX,
            padding_ratio: PADDING_RATIO,
        }
    }
}

impl MapBounds {
    fn padding(&self) -> f64 {
        (self.base_max - self.base_min) * self.padding_ratio
    }

    /// `MAP_MIN`
    pub fn min(&self) -> f64 {
        self.base_min - self.padding()
    }

    /// `MAP_MAX`
    pub fn max(&self) -> f64 {
        self.base_max + self.padding()
    }

    /// Normalize a world coordinate to `[0, 1]` over the padded square
    ///
    /// Values outside the square fall outside `[0, 1]`; a zero span is
    /// treated as 1 so the result stays finite.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max() - self.min();
        let span = if span == 0.0 { 1.0 } else { span };
        (value - self.min()) / span
    }
}

/// A point on the drawing surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

/// Projection from world coordinates onto a canvas of a given size
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    bounds: MapBounds,
    width: f32,
    height: f32,
    margin: f32,
}

impl MapProjection {
    /// Margin is capped at half the smaller canvas side
    pub fn new(bounds: MapBounds, width: f32, height: f32, margin: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let margin = margin.max(0.0).min(width / 2.0).min(height / 2.0);
        Self {
            bounds,
            width,
            height,
            margin,
        }
    }

    /// Inset drawable rectangle as `(top_left, bottom_right)`
    pub fn drawable(&self) -> (CanvasPoint, CanvasPoint) {
        (
            CanvasPoint {
                x: self.margin,
                y: self.margin,
            },
            CanvasPoint {
                x: self.width - self.margin,
                y: self.height - self.margin,
            },
        )
    }

    pub fn project(&self, point: WorldPoint) -> CanvasPoint {
        let nx = self.bounds.normalize(point.x);
        let ny = self.bounds.normalize(point.y);

        let usable_w = (self.width - self.margin * 2.0) as f64;
        let usable_h = (self.height - self.margin * 2.0) as f64;

        let cx = self.margin as f64 + nx * usable_w;
        let cy = self.margin as f64 + (1.0 - ny) * usable_h;

        let (min, max) = self.drawable();
        CanvasPoint {
            x: clamp_or_min(cx as f32, min.x, max.x),
            y: clamp_or_min(cy as f32, min.y, max.y),
        }
    }
}

// NaN never escapes the drawable rectangle
fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn projection() -> MapProjection {
        MapProjection::new(MapBounds::default(), 1000.0, 1000.0, CANVAS_MARGIN)
    }

    #[test]
    fn test_padded_bounds() {
        let b = MapBounds::default();
        assert!((b.min() - (9684.0 - 667.5)).abs() < 1e-9);
        assert!((b.max() - (23034.0 + 667.5)).abs() < 1e-9);
    }

    #[test]
    fn test_corners_map_to_inset_rectangle() {
        let p = projection();
        let b = MapBounds::default();

        let bottom_left = p.project(WorldPoint { x: b.min(), y: b.min() });
        assert_eq!(bottom_left, CanvasPoint { x: 20.0, y: 980.0 });

        let top_right = p.project(WorldPoint { x: b.max(), y: b.max() });
        assert_eq!(top_right, CanvasPoint { x: 980.0, y: 20.0 });
    }

    #[test]
    fn test_center_maps_to_canvas_center() {
        let p = projection();
        let mid = (BASE_MIN + BASE_MAX) / 2.0;
        let c = p.project(WorldPoint { x: mid, y: mid });
        assert!((c.x - 500.0).abs() < 1e-3);
        assert!((c.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_oversized_margin_does_not_panic() {
        let p = MapProjection::new(MapBounds::default(), 30.0, 10.0, 20.0);
        let c = p.project(WorldPoint { x: 0.0, y: 0.0 });
        assert_eq!(c, CanvasPoint { x: 5.0, y: 5.0 });
    }

    #[test]
    fn test_degenerate_bounds_stay_finite() {
        let bounds = MapBounds {
            base_min: 100.0,
            base_max: 100.0,
            padding_ratio: 0.05,
        };
        let p = MapProjection::new(bounds, 200.0, 200.0, 10.0);
        let c = p.project(WorldPoint { x: 100.0, y: 100.0 });
        assert!(c.x.is_finite() && c.y.is_finite());
    }

    proptest! {
        #[test]
        fn projection_stays_inside_inset(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let p = projection();
            let (min, max) = p.drawable();
            let c = p.project(WorldPoint { x, y });
            prop_assert!(c.x >= min.x && c.x <= max.x);
            prop_assert!(c.y >= min.y && c.y <= max.y);
        }

        #[test]
        fn projection_is_monotonic(a in -1e5f64..1e5, b in -1e5f64..1e5, other in -1e5f64..1e5) {
            let p = projection();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            // X grows with world X
            let cx_lo = p.project(WorldPoint { x: lo, y: other }).x;
            let cx_hi = p.project(WorldPoint { x: hi, y: other }).x;
            prop_assert!(cx_lo <= cx_hi);

            // Y is inverted: larger world Y never lands lower on the canvas
            let cy_lo = p.project(WorldPoint { x: other, y: lo }).y;
            let cy_hi = p.project(WorldPoint { x: other, y: hi }).y;
            prop_assert!(cy_hi <= cy_lo);
        }
    }
}
