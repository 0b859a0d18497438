//! Abstract input key event, independent of terminal library.
//!
//! Keeps tgbridge-app free of crossterm types; the TUI converts its key
//! events into [`InputKey`] at the boundary.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    BackTab,
}
