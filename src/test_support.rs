//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::config::default_links;
use crate::core::state::App;
use crate::core::theme::ThemeMode;

/// Creates a light-themed App on the home screen with the default footer links.
pub fn test_app() -> App {
    let mut app = App::new(ThemeMode::Light);
    app.links = default_links();
    app
}

/// Flattens a test terminal's buffer into one string for `contains` checks.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
