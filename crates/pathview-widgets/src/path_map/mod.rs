//! Path map display
//!
//! Draws one [`RenderFrame`](pathview_core::RenderFrame) over the background
//! map image:
//!
//! 1. Background image stretched to the full canvas
//! 2. One polyline per minute bucket, colored from the theme palette
//! 3. Filled marker at the interpolated position
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! let map = path_map(&self.map_state);
//! ```

mod canvas;
mod state;
mod view;

pub use state::{PathMapState, DEFAULT_CANVAS_SIZE, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_RADIUS};
pub use view::path_map;
