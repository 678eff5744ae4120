//! Transport controls (horizontal layout below the map)
//!
//! - Play/Pause toggle
//! - Scrub slider over the recorded time range
//! - Game-time label
//! - Speed ladder: [-] [Nx] [+]

use iced::widget::{button, row, slider, text};
use iced::{Alignment, Element, Length};

use pathview_core::playback::PlaybackState;
use pathview_core::RenderFrame;

use super::message::Message;

/// Render transport controls
pub fn view<'a>(
    playback: &PlaybackState,
    frame: &'a RenderFrame,
    loop_running: bool,
) -> Element<'a, Message> {
    let is_playing = playback.is_playing();
    let speed = playback.speed();

    let play_btn = button(text(playback.play_pause_label()).size(14))
        .on_press_maybe(loop_running.then_some(Message::TogglePlay))
        .width(Length::Fixed(72.0));

    // Dragging has no effect while playing
    let scrub = slider(0.0..=1.0, playback.scrub_ratio(), Message::Scrub)
        .step(0.001)
        .width(Length::Fill);

    let clock = text(frame.clock_label.as_str())
        .size(16)
        .width(Length::Fixed(64.0));

    let slower = button(text("−").size(14))
        .on_press_maybe((loop_running && speed.index() > 0).then_some(Message::SpeedDown))
        .width(Length::Fixed(28.0))
        .padding(0);

    let speed_label = text(speed.label()).size(14).width(Length::Fixed(44.0));

    let faster = button(text("+").size(14))
        .on_press_maybe(
            (loop_running && speed.index() + 1 < speed.speeds().len())
                .then_some(Message::SpeedUp),
        )
        .width(Length::Fixed(28.0))
        .padding(0);

    let scrub_hint = if is_playing && loop_running {
        text("pause to scrub").size(11)
    } else {
        text("").size(11)
    };

    row![play_btn, scrub, clock, slower, speed_label, faster, scrub_hint]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
