//! Load completion handlers
//!
//! Handles: MapLoaded, SamplesLoaded

use iced::widget::image;
use iced::Task;
use pathview_core::timeline::SampleSequence;

use crate::loader;
use crate::ui::app::PathViewerApp;
use crate::ui::message::Message;

impl PathViewerApp {
    /// Background ready: start the one-time sample load
    pub fn handle_map_loaded(&mut self, result: Result<image::Handle, String>) -> Task<Message> {
        match result {
            Ok(handle) => {
                self.map_state.set_background(handle);
                self.status = format!("Loading samples {}", self.files.path_file.display());
                Task::perform(
                    loader::load_sample_document(self.files.path_file.clone()),
                    Message::SamplesLoaded,
                )
            }
            Err(e) => {
                log::error!("Error loading map image: {}", e);
                self.status = format!("Error loading map: {}", e);
                Task::none()
            }
        }
    }

    /// Sample load finished: start the render loop either way
    ///
    /// A failed load leaves the player with zero samples; the loop still
    /// runs and renders only the background.
    pub fn handle_samples_loaded(
        &mut self,
        result: Result<SampleSequence, String>,
    ) -> Task<Message> {
        match result {
            Ok(sequence) => {
                if sequence.is_empty() {
                    log::warn!("Sample document {:?} is empty", self.files.path_file);
                    self.status = "No samples to play".to_string();
                } else {
                    self.status = format!("{} samples loaded", sequence.len());
                }
                self.player.load(sequence);
            }
            Err(e) => {
                log::error!("Error loading path samples: {}", e);
                self.status = format!("Error loading samples: {}", e);
            }
        }

        self.map_state.set_frame(self.player.render());
        self.last_frame = None;
        self.loop_running = true;
        log::info!("Render loop started");
        Task::none()
    }
}
