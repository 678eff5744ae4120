//! UI module for pathview-player
//!
//! Built with iced, using the message-passing architecture: loads and
//! display refreshes arrive as messages on the same queue as user input.

pub mod app;
pub mod handlers;
pub mod message;
pub mod stats_panel;
pub mod transport;

pub use app::PathViewerApp;
pub use message::Message;
