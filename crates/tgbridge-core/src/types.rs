//! Core domain type definitions

use serde::{Deserialize, Serialize};

/// Connection status of a channel, as shown on its badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    /// Forwarding to Telegram
    Active,
    /// Disconnected by the user
    Paused,
    /// Channel carries a fault
    Error,
}

impl ChannelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelStatus::Active => "active",
            ChannelStatus::Paused => "paused",
            ChannelStatus::Error => "error",
        }
    }

    /// Color token used to render the status indicator
    pub fn color(&self) -> StatusColor {
        match self {
            ChannelStatus::Active => StatusColor::Green,
            ChannelStatus::Paused => StatusColor::Gray,
            ChannelStatus::Error => StatusColor::Red,
        }
    }
}

impl std::fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderer-independent color token for a channel status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Green,
    Gray,
    Red,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Gray => "gray",
            StatusColor::Red => "red",
        }
    }
}

/// A Discord text channel and its forwarding-connection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    /// Discord server the channel belongs to
    pub server: String,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub messages_count: u64,
    /// Preview of the most recent message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    /// Fault description; a faulted channel reports [`ChannelStatus::Error`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            server: server.into(),
            connected: false,
            messages_count: 0,
            last_message: None,
            last_error: None,
        }
    }

    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    pub fn with_messages_count(mut self, count: u64) -> Self {
        self.messages_count = count;
        self
    }

    pub fn with_last_message(mut self, message: impl Into<String>) -> Self {
        self.last_message = Some(message.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.last_error = Some(error.into());
        self
    }

    /// Status derived from the connection flag and fault state.
    ///
    /// Never stored, so it cannot drift from `connected`.
    pub fn status(&self) -> ChannelStatus {
        if self.last_error.is_some() {
            ChannelStatus::Error
        } else if self.connected {
            ChannelStatus::Active
        } else {
            ChannelStatus::Paused
        }
    }

    /// Flip the connection flag. Clears any fault, so the resulting status
    /// is `Active` when now connected and `Paused` otherwise.
    pub fn toggle_connection(&mut self) {
        self.connected = !self.connected;
        self.last_error = None;
    }

    /// Name as displayed in lists (`#general`)
    pub fn display_name(&self) -> String {
        format!("#{}", self.name)
    }

    /// Uppercased first letter of the name, used as the channel avatar
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('#')
    }
}

/// Kind of notification, used only to pick its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Media,
    Mention,
}

impl NotificationKind {
    pub fn icon(&self) -> IconId {
        match self {
            NotificationKind::Message => IconId::MessageSquare,
            NotificationKind::Media => IconId::Image,
            NotificationKind::Mention => IconId::AtSign,
        }
    }
}

/// Renderer-independent icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    MessageSquare,
    Image,
    AtSign,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::MessageSquare => "message-square",
            IconId::Image => "image",
            IconId::AtSign => "at-sign",
        }
    }
}

/// An inbound message event surfaced in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    /// Source channel name. Free text, not checked against known channels.
    pub channel: String,
    pub message: String,
    /// Relative time as displayed ("2 min ago"); never recomputed
    pub time: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        channel: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: id.into(),
            channel: channel.into(),
            message: message.into(),
            time: time.into(),
            kind,
        }
    }
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Initializing,
    Running,
    Quitting,
}
