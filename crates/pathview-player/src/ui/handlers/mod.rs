//! Message handlers, grouped by concern
//!
//! Each file adds `handle_*` methods to `PathViewerApp`.

mod keyboard;
mod loading;
mod playback;
mod tick;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use iced::time::Instant;
    use iced::widget::image;
    use pathview_core::loader::parse_samples;

    use crate::config::PlayerConfig;
    use crate::launch::InputFiles;
    use crate::ui::app::PathViewerApp;
    use crate::ui::message::Message;

    const ONE_MINUTE: &str = r#"[
        {"t": 0.0, "x": 9684.0, "y": 9684.0},
        {"t": 60.0, "x": 23034.0, "y": 23034.0, "lastHits": 5, "creepGold": 500}
    ]"#;

    fn new_app() -> PathViewerApp {
        let files = InputFiles {
            map_image: PathBuf::from("map.png"),
            path_file: PathBuf::from("run.json"),
        };
        let (app, _task) = PathViewerApp::new(PlayerConfig::default(), files);
        app
    }

    fn map_loaded(app: &mut PathViewerApp) {
        let _ = app.update(Message::MapLoaded(Ok(image::Handle::from_bytes(Vec::new()))));
    }

    /// App with the map and the one-minute document loaded, paused at 0s
    fn running_app() -> PathViewerApp {
        let mut app = new_app();
        map_loaded(&mut app);
        let sequence = parse_samples(ONE_MINUTE).unwrap();
        let _ = app.update(Message::SamplesLoaded(Ok(sequence)));
        assert!(app.loop_running);
        app
    }

    #[test]
    fn test_map_failure_never_starts_loop() {
        let mut app = new_app();
        let _ = app.update(Message::MapLoaded(Err("no such file".to_string())));

        assert!(!app.loop_running);
        assert!(app.map_state.background.is_none());
        assert!(app.status.contains("no such file"));

        // Controls stay inert while nothing is loaded
        let _ = app.update(Message::TogglePlay);
        let _ = app.update(Message::SpeedUp);
        assert!(!app.player.playback().is_playing());
        assert_eq!(app.player.playback().speed().label(), "1x");
    }

    #[test]
    fn test_sample_failure_still_runs_loop() {
        let mut app = new_app();
        map_loaded(&mut app);
        let _ = app.update(Message::SamplesLoaded(Err("bad json".to_string())));

        assert!(app.loop_running);
        assert!(app.map_state.background.is_some());
        assert!(app.status.contains("bad json"));

        let now = Instant::now();
        let _ = app.update(Message::Frame(now));
        let _ = app.update(Message::Frame(now + Duration::from_millis(16)));
        assert!(app.map_state.frame.is_empty());
        assert!(app.map_state.frame.marker.is_none());
        assert!(app.map_state.frame.stats.is_none());
    }

    #[test]
    fn test_first_frame_advances_by_zero() {
        let mut app = running_app();
        let _ = app.update(Message::TogglePlay);

        let start = Instant::now();
        let _ = app.update(Message::Frame(start));
        assert_eq!(app.map_state.frame.time, 0.0);

        let _ = app.update(Message::Frame(start + Duration::from_secs(10)));
        assert_eq!(app.map_state.frame.time, 10.0);
    }

    #[test]
    fn test_paused_scrub_renders_immediately() {
        let mut app = running_app();
        let _ = app.update(Message::Scrub(0.5));

        let frame = &app.map_state.frame;
        assert_eq!(frame.time, 30.0);
        assert!(frame.marker.is_some());
        assert_eq!(frame.clock_label, "-01:30");
    }

    #[test]
    fn test_scrub_ignored_while_playing() {
        let mut app = running_app();
        let _ = app.update(Message::TogglePlay);
        let _ = app.update(Message::Frame(Instant::now()));

        let _ = app.update(Message::Scrub(0.9));
        assert_eq!(app.player.playback().scrub_ratio(), 0.0);
        assert_eq!(app.map_state.frame.time, 0.0);
    }

    #[test]
    fn test_speed_buttons_after_load() {
        let mut app = running_app();
        let _ = app.update(Message::SpeedUp);
        assert_eq!(app.player.playback().speed().label(), "1.5x");
        let _ = app.update(Message::SpeedDown);
        let _ = app.update(Message::SpeedDown);
        assert_eq!(app.player.playback().speed().label(), "0.5x");
    }
}
