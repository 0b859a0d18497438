//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick, drives toast expiry
    Tick,

    /// Request to quit (may be dismissed in the future by a dialog)
    RequestQuit,

    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Channel Selection
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Channel Toggle
    // ─────────────────────────────────────────────────────────
    /// Toggle the selected channel
    ToggleSelected,

    /// Toggle a channel by its id
    ToggleChannel { id: String },

    /// Toggle the channel at a zero-based list position
    ToggleChannelAt(usize),

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────
    /// "Load more" in the notification feed; there is no older history
    LoadMoreNotifications,

    /// Hide the current toast before it expires
    DismissToast,
}
