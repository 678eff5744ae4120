//! Main iced application for the path viewer
//!
//! Startup sequence:
//! 1. Boot: read the background map asynchronously
//! 2. Map loaded: read the sample document asynchronously
//! 3. Samples loaded (or failed): start the per-frame render loop
//!
//! After that the frame subscription drives `PathPlayer::tick` once per
//! display refresh and the transport controls submit playback commands.

use iced::time::Instant;
use iced::widget::{column, container, row, text};
use iced::{event, keyboard, window, Element, Event, Fill, Subscription, Task, Theme};

use pathview_core::loader::document_title;
use pathview_core::PathPlayer;
use pathview_widgets::{path_map, PathMapState, PathTheme};

use super::message::Message;
use super::{stats_panel, transport};
use crate::config::PlayerConfig;
use crate::launch::InputFiles;
use crate::loader;

/// Application state
pub struct PathViewerApp {
    pub(crate) config: PlayerConfig,
    pub(crate) files: InputFiles,
    pub(crate) title: String,
    /// Sample sequence, playback state and render step
    pub(crate) player: PathPlayer,
    /// Background image and latest frame for the map canvas
    pub(crate) map_state: PathMapState,
    /// Instant of the previous display refresh
    pub(crate) last_frame: Option<Instant>,
    /// Render loop active (background loaded and sample load attempted)
    pub(crate) loop_running: bool,
    pub(crate) status: String,
}

impl PathViewerApp {
    /// Create the application and start loading the background map
    pub fn new(config: PlayerConfig, files: InputFiles) -> (Self, Task<Message>) {
        let title = document_title(&files.path_file);
        let display = &config.display;

        let map_state = PathMapState::new()
            .with_bounds(display.map_bounds, display.canvas_margin)
            .with_geometry(display.canvas_size, display.line_width, display.marker_radius)
            .with_theme(PathTheme::from(&config.theme));

        let app = Self {
            player: PathPlayer::new(config.playback.speed_ladder()),
            map_state,
            title,
            last_frame: None,
            loop_running: false,
            status: format!("Loading map {}", files.map_image.display()),
            config,
            files: files.clone(),
        };

        let task = Task::perform(loader::load_map_image(files.map_image), Message::MapLoaded);
        (app, task)
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(now) => self.handle_frame(now),
            Message::MapLoaded(result) => self.handle_map_loaded(result),
            Message::SamplesLoaded(result) => self.handle_samples_loaded(result),
            Message::TogglePlay => self.handle_toggle_play(),
            Message::Scrub(ratio) => self.handle_scrub(ratio),
            Message::SpeedUp => self.handle_speed_up(),
            Message::SpeedDown => self.handle_speed_down(),
            Message::KeyPressed(key, modifiers) => self.handle_key_pressed(key, modifiers),
        }
    }

    /// Frame events once the loop is running, keyboard shortcuts always
    pub fn subscription(&self) -> Subscription<Message> {
        let keys = event::listen_with(key_event_to_message);

        if self.loop_running {
            Subscription::batch([window::frames().map(Message::Frame), keys])
        } else {
            keys
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = text(&self.title).size(22);

        let main_content = row![
            path_map(&self.map_state),
            stats_panel::view(&self.map_state.frame, &self.map_state.theme),
        ]
        .spacing(16);

        let controls = transport::view(
            self.player.playback(),
            &self.map_state.frame,
            self.loop_running,
        );

        let status_bar = container(text(&self.status).size(12)).padding(5);

        let content = column![header, main_content, controls, status_bar]
            .spacing(10)
            .padding(10);

        container(content).width(Fill).height(Fill).into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn key_event_to_message(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed(key, modifiers))
        }
        _ => None,
    }
}
