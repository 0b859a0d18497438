//! tgbridge-tui - Terminal dashboard for the Discord to Telegram bridge
//!
//! Renders the [`tgbridge_app::AppState`] with ratatui and feeds crossterm
//! key events into the TEA update loop.

pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
