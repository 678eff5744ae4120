//! Frame handler
//!
//! Called once per display refresh while the render loop runs. Wall-clock
//! time between refreshes drives playback; the first refresh advances by
//! zero.

use std::time::Duration;

use iced::time::Instant;
use iced::Task;

use crate::ui::app::PathViewerApp;
use crate::ui::message::Message;

impl PathViewerApp {
    /// Handle Frame message
    pub fn handle_frame(&mut self, now: Instant) -> Task<Message> {
        let elapsed = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);

        let was_playing = self.player.playback().is_playing();
        let frame = self.player.tick(elapsed);
        if was_playing && !self.player.playback().is_playing() {
            log::info!("Reached end of recording at {:.1}s", frame.time);
        }

        self.map_state.set_frame(frame);
        Task::none()
    }
}
