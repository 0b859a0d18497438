//! Configuration types for tgbridge
//!
//! Defines:
//! - `Settings` - Application settings (`.tgbridge/config.toml`)
//! - `UiSettings` / `RelaySettings` - Per-surface sections
//! - `IconMode` - Glyph set selection

use serde::{Deserialize, Serialize};
use tgbridge_core::{Channel, Notification};

/// Application settings (.tgbridge/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub relay: RelaySettings,

    /// Seed channels. Empty means the built-in fixtures are used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<Channel>,

    /// Seed notifications. Empty means the built-in fixtures are used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

/// Icon mode for the terminal UI
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// How long a toast stays visible
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Telegram bot shown in the footer card
    #[serde(default = "default_bot_handle")]
    pub bot_handle: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            toast_duration_ms: default_toast_duration_ms(),
            bot_handle: default_bot_handle(),
        }
    }
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_bot_handle() -> String {
    "@your_bot".to_string()
}

/// Webhook relay settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelaySettings {
    /// Listen address for `tgbridge serve`
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_telegram_api_base")]
    pub telegram_api_base: String,

    /// Timeout for each `sendMessage` call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Embeds beyond this count are dropped
    #[serde(default = "default_max_embeds")]
    pub max_embeds: usize,

    /// Embed descriptions are cut to this many characters
    #[serde(default = "default_embed_description_limit")]
    pub embed_description_limit: usize,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            telegram_api_base: default_telegram_api_base(),
            timeout_secs: default_timeout_secs(),
            max_embeds: default_max_embeds(),
            embed_description_limit: default_embed_description_limit(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_embeds() -> usize {
    3
}

fn default_embed_description_limit() -> usize {
    200
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgbridge_core::NotificationKind;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.ui.toast_duration_ms, 3000);
        assert_eq!(settings.ui.bot_handle, "@your_bot");
        assert_eq!(settings.relay.bind, "127.0.0.1:8080");
        assert_eq!(settings.relay.telegram_api_base, "https://api.telegram.org");
        assert_eq!(settings.relay.timeout_secs, 10);
        assert_eq!(settings.relay.max_embeds, 3);
        assert_eq!(settings.relay.embed_description_limit, 200);
        assert!(settings.channels.is_empty());
        assert!(settings.notifications.is_empty());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            icons = "nerd_fonts"

            [relay]
            max_embeds = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.toast_duration_ms, 3000);
        assert_eq!(settings.relay.max_embeds, 5);
        assert_eq!(settings.relay.embed_description_limit, 200);
    }

    #[test]
    fn test_seed_tables() {
        let settings: Settings = toml::from_str(
            r#"
            [[channels]]
            id = "9"
            name = "ops"
            server = "Infra"
            connected = true
            last_error = "bot removed"

            [[notifications]]
            id = "1"
            channel = "ops"
            message = "Deploy finished"
            time = "now"
            kind = "mention"
            "#,
        )
        .unwrap();

        assert_eq!(settings.channels.len(), 1);
        assert_eq!(settings.channels[0].messages_count, 0);
        assert_eq!(settings.channels[0].last_error.as_deref(), Some("bot removed"));
        assert_eq!(settings.notifications[0].kind, NotificationKind::Mention);
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
