//! Transport control handlers
//!
//! Handles: TogglePlay, Scrub, SpeedUp, SpeedDown
//!
//! All controls are inert until the render loop has started.

use iced::Task;
use pathview_core::playback::PlaybackCommand;

use crate::ui::app::PathViewerApp;
use crate::ui::message::Message;

impl PathViewerApp {
    /// Handle TogglePlay message
    pub fn handle_toggle_play(&mut self) -> Task<Message> {
        if self.loop_running {
            self.player.command(PlaybackCommand::TogglePlay);
        }
        Task::none()
    }

    /// Handle Scrub message
    ///
    /// While paused the new position is rendered immediately instead of
    /// waiting for the next frame.
    pub fn handle_scrub(&mut self, ratio: f64) -> Task<Message> {
        if self.loop_running && !self.player.playback().is_playing() {
            self.player.command(PlaybackCommand::Scrub(ratio));
            self.map_state.set_frame(self.player.render());
        }
        Task::none()
    }

    /// Handle SpeedUp message
    pub fn handle_speed_up(&mut self) -> Task<Message> {
        if self.loop_running {
            self.player.command(PlaybackCommand::SpeedUp);
        }
        Task::none()
    }

    /// Handle SpeedDown message
    pub fn handle_speed_down(&mut self) -> Task<Message> {
        if self.loop_running {
            self.player.command(PlaybackCommand::SpeedDown);
        }
        Task::none()
    }
}
