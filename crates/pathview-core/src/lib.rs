//! Pathview Core - Playback engine for recorded hero paths
//!
//! GUI-free building blocks shared by the viewer application:
//!
//! - **types**: `Sample`, the one recorded observation
//! - **timeline**: the immutable `SampleSequence` and time-to-sample mapping
//! - **map**: world-to-canvas projection with padded map bounds
//! - **playback**: play/pause/scrub state machine and the speed ladder
//! - **stats**: gold breakdown and the sticky last-hit highlight
//! - **clock**: game-time label formatting
//! - **render**: `PathPlayer`, which turns playback state into a `RenderFrame`
//! - **loader**: JSON sample document loading
//! - **config**: generic YAML config load/save

pub mod clock;
pub mod config;
pub mod error;
pub mod loader;
pub mod map;
pub mod playback;
pub mod render;
pub mod stats;
pub mod timeline;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use render::{PathPlayer, RenderFrame};
pub use types::*;
