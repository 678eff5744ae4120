//! Application messages for pathview-player

use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;
use iced::widget::image;
use pathview_core::timeline::SampleSequence;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Display refresh: one render step per frame
    Frame(Instant),
    /// Background map load completed
    MapLoaded(Result<image::Handle, String>),
    /// Sample document load completed
    SamplesLoaded(Result<SampleSequence, String>),

    // Transport
    /// Play/Pause button
    TogglePlay,
    /// Scrub slider moved (normalized position 0.0-1.0)
    Scrub(f64),
    /// Speed + button
    SpeedUp,
    /// Speed − button
    SpeedDown,

    /// Key pressed (not captured by a widget)
    KeyPressed(Key, Modifiers),
}
