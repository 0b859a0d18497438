//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tgbridge_core::prelude::*;
use tgbridge_core::AppPhase;

use super::{keys::handle_key, UpdateResult};
use crate::message::Message;
use crate::state::AppState;
use crate::toast::Toast;

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_toast(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Channel Toggle
        // ─────────────────────────────────────────────────────────
        Message::ToggleSelected => match state.selected_channel() {
            Some(channel) => UpdateResult::message(Message::ToggleChannel {
                id: channel.id.clone(),
            }),
            None => UpdateResult::none(),
        },

        Message::ToggleChannelAt(index) => match state.channels.channels().get(index) {
            Some(channel) => UpdateResult::message(Message::ToggleChannel {
                id: channel.id.clone(),
            }),
            None => {
                debug!("No channel at position {}", index);
                UpdateResult::none()
            }
        },

        Message::ToggleChannel { id } => handle_toggle_channel(state, &id),

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::LoadMoreNotifications => {
            debug!(
                "Load more requested with {} notifications loaded; no older history",
                state.notifications.len()
            );
            UpdateResult::none()
        }

        Message::DismissToast => {
            state.toast = None;
            UpdateResult::none()
        }
    }
}

fn handle_toggle_channel(state: &mut AppState, id: &str) -> UpdateResult {
    let outcome = state.channels.toggle(id);

    if outcome.found {
        info!(
            "Channel {} {} (active: {}, total messages: {})",
            id,
            if outcome.was_connected {
                "disconnected"
            } else {
                "connected"
            },
            state.channels.active_channels(),
            state.channels.total_messages()
        );
    } else {
        warn!("Toggle requested for unknown channel {}", id);
    }

    let duration = state.toast_duration();
    state.show_toast(Toast::new(outcome.confirmation(), duration));
    UpdateResult::none()
}
