//! Keyboard shortcut handler
//!
//! Handles: KeyPressed. Key names follow the config format
//! "Shift+Ctrl+Alt+KeyName" (see `KeybindingsConfig`).

use iced::keyboard::{key::Named, Key, Modifiers};
use iced::Task;

use crate::ui::app::PathViewerApp;
use crate::ui::message::Message;

impl PathViewerApp {
    /// Handle KeyPressed message
    pub fn handle_key_pressed(&mut self, key: Key, modifiers: Modifiers) -> Task<Message> {
        let name = key_to_string(&key, &modifiers);
        if name.is_empty() {
            return Task::none();
        }

        let bindings = &self.config.keybindings;
        let matches = |list: &[String]| list.iter().any(|b| b.eq_ignore_ascii_case(&name));

        if matches(&bindings.play_pause) {
            self.update(Message::TogglePlay)
        } else if matches(&bindings.speed_up) {
            self.update(Message::SpeedUp)
        } else if matches(&bindings.speed_down) {
            self.update(Message::SpeedDown)
        } else {
            Task::none()
        }
    }
}

/// Convert an iced keyboard key + modifiers to a string for matching
///
/// Format: "Shift+Ctrl+Alt+KeyName". Shift is omitted for character keys,
/// whose text already reflects it (`+` rather than `Shift+=`).
pub fn key_to_string(key: &Key, modifiers: &Modifiers) -> String {
    let key_name = match key {
        Key::Named(named) => match named {
            Named::Space => "Space",
            Named::ArrowUp => "Up",
            Named::ArrowDown => "Down",
            Named::ArrowLeft => "Left",
            Named::ArrowRight => "Right",
            Named::Enter => "Enter",
            Named::Home => "Home",
            Named::End => "End",
            _ => return String::new(),
        }
        .to_string(),
        Key::Character(c) => c.to_string(),
        _ => return String::new(),
    };

    let mut parts = Vec::new();
    if modifiers.shift() && matches!(key, Key::Named(_)) {
        parts.push("Shift");
    }
    if modifiers.control() {
        parts.push("Ctrl");
    }
    if modifiers.alt() {
        parts.push("Alt");
    }
    parts.push(&key_name);
    parts.join("+")
}
