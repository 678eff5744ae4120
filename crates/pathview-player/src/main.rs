//! Path viewer - replays a recorded Dota 2 hero path over the map
//!
//! This is the main entry point for the GUI application. It:
//! 1. Parses the command line and loads the YAML config
//! 2. Resolves the map image and sample document
//! 3. Launches the iced application, which loads both asynchronously
//!
//! ## Command line
//!
//! See [`launch::LaunchOptions`] or `--help`. `--init-config` writes the
//! default config file and exits.

mod config;
mod launch;
mod loader;
mod ui;

use clap::Parser;
use iced::{Element, Size, Subscription, Task, Theme};

use launch::LaunchOptions;
use pathview_core::config::{load_config, save_config};
use ui::{Message, PathViewerApp};

/// Room for the stats panel beside the map
const SIDE_PANEL_WIDTH: f32 = 300.0;
/// Room for the header, transport row and status bar
const CHROME_HEIGHT: f32 = 160.0;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = LaunchOptions::parse();

    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(config::default_config_path);

    if options.init_config {
        let defaults = config::PlayerConfig::default();
        match save_config(&defaults, &config_path) {
            Ok(()) => println!("Wrote default config to {}", config_path.display()),
            Err(e) => {
                eprintln!("Could not write config: {:#}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    log::info!("pathview-player starting up");
    let config: config::PlayerConfig = load_config(&config_path);
    let files = options.input_files(&config);
    log::info!(
        "Map image {:?}, sample document {:?}",
        files.map_image,
        files.path_file
    );

    let canvas_size = config.display.canvas_size;

    // The boot function must be Fn, so hand it clones
    iced::application(
        move || PathViewerApp::new(config.clone(), files.clone()),
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title(title)
    .window_size(Size::new(
        canvas_size + SIDE_PANEL_WIDTH,
        canvas_size + CHROME_HEIGHT,
    ))
    .run()
}

/// Update function for iced
fn update(app: &mut PathViewerApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &PathViewerApp) -> Element<'_, Message> {
    app.view()
}

fn subscription(app: &PathViewerApp) -> Subscription<Message> {
    app.subscription()
}

fn theme(app: &PathViewerApp) -> Theme {
    app.theme()
}

/// Window title follows the loaded document
fn title(app: &PathViewerApp) -> String {
    app.title()
}
