//! Full-screen rendering tests

use super::*;
use crate::process::process_message;
use crate::test_utils::TestTerminal;
use tgbridge_app::{IconMode, InputKey, Message, Settings};

fn render(term: &mut TestTerminal, state: &AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_view_renders_dashboard() {
    let state = AppState::new();
    let mut term = TestTerminal::new();
    render(&mut term, &state);

    assert!(term.buffer_contains("Discord → Telegram Bridge"));
    assert!(term.buffer_contains("Active channels"));
    assert!(term.buffer_contains("1,899"));
    assert!(term.buffer_contains("System operational"));
    assert!(term.buffer_contains("#general"));
    assert!(term.buffer_contains("Recent notifications"));
    assert!(term.buffer_contains("Load more"));
    assert!(term.buffer_contains("All messages are forwarded to @your_bot"));
}

#[test]
fn test_view_reflects_toggle() {
    let mut state = AppState::new();
    let mut term = TestTerminal::new();

    // Active channels value: first card, inner row 1, after " ~ "
    let value_cell: (u16, u16) = (4, 5);

    render(&mut term, &state);
    assert_eq!(term.buffer()[value_cell].symbol(), "2");

    process_message(&mut state, Message::Key(InputKey::Char('3')));
    render(&mut term, &state);

    assert_eq!(state.channels.active_channels(), 3);
    assert_eq!(term.buffer()[value_cell].symbol(), "3");
    assert!(term.buffer_contains("Channel connected"));
}

#[test]
fn test_toast_disappears_after_expiry() {
    let mut settings = Settings::default();
    settings.ui.toast_duration_ms = 0;
    let mut state = AppState::with_settings(settings);
    let mut term = TestTerminal::new();

    process_message(&mut state, Message::ToggleChannelAt(0));
    render(&mut term, &state);
    assert!(term.buffer_contains("Channel disconnected"));

    process_message(&mut state, Message::Tick);
    render(&mut term, &state);
    assert!(!term.buffer_contains("Channel disconnected"));
}

#[test]
fn test_view_uses_configured_bot_handle() {
    let mut settings = Settings::default();
    settings.ui.bot_handle = "@bridge_bot".to_string();
    let state = AppState::with_settings(settings);

    let mut term = TestTerminal::new();
    render(&mut term, &state);
    assert!(term.buffer_contains("@bridge_bot"));
}

#[test]
fn test_view_nerd_font_icons() {
    let mut settings = Settings::default();
    settings.ui.icons = IconMode::NerdFonts;
    let state = AppState::with_settings(settings);

    let mut term = TestTerminal::new();
    render(&mut term, &state);
    assert!(term.buffer_contains("\u{f205}"));
}

#[test]
fn test_view_compact_does_not_panic() {
    let state = AppState::new();
    let mut term = TestTerminal::compact();
    render(&mut term, &state);
    assert!(term.buffer_contains("Discord"));
}
