//! Color palette for the dashboard.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accents (Discord purple, Telegram blue, highlight orange) ---
pub const ACCENT: Color = Color::Cyan;
pub const ACCENT_PRIMARY: Color = Color::Magenta;
pub const ACCENT_SECONDARY: Color = Color::Blue;
pub const ACCENT_WARM: Color = Color::LightRed;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_GRAY: Color = Color::Gray;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;
