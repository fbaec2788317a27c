//! Shared test utilities.

#![allow(dead_code)]

use anecdota::config::Config;
use anecdota::route::Route;
use anecdota::ui::app::App;
use anecdota::ui::input::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An app on the list view with the default config and seed data.
pub fn make_app() -> App {
    App::new(Config::default(), Route::Anecdotes)
}

/// A config whose notification timeout is short enough for tests to
/// wait out.
pub fn quick_config() -> Config {
    let mut config = Config::default();
    config.ui.notification_timeout_ms = 5;
    config
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

/// Types text one key at a time, as the terminal would deliver it.
pub fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
