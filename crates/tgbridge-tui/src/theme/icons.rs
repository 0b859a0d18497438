//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use tgbridge_app::config::IconMode;
use tgbridge_core::IconId;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a notification icon identifier
    pub fn for_id(&self, id: IconId) -> &'static str {
        match id {
            IconId::MessageSquare => self.message(),
            IconId::Image => self.image(),
            IconId::AtSign => self.at_sign(),
        }
    }

    pub fn message(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f075}", // nf-fa-comment
            IconMode::Unicode => "\u{2709}",   // ✉
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    pub fn at_sign(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1fa}", // nf-fa-at
            IconMode::Unicode => "@",
        }
    }

    pub fn zap(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e7}", // nf-fa-bolt
            IconMode::Unicode => "\u{03df}",   // ϟ
        }
    }

    pub fn activity(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f1}", // nf-fa-heartbeat
            IconMode::Unicode => "~",
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f3}", // nf-fa-bell
            IconMode::Unicode => "\u{266a}",   // ♪
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{221e}",   // ∞
        }
    }

    pub fn send(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1d8}", // nf-fa-paper_plane
            IconMode::Unicode => "\u{27a4}",   // ➤
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    /// Toggle switch glyph
    pub fn switch(&self, on: bool) -> &'static str {
        match (self.mode, on) {
            (IconMode::NerdFonts, true) => "\u{f205}",  // nf-fa-toggle_on
            (IconMode::NerdFonts, false) => "\u{f204}", // nf-fa-toggle_off
            (IconMode::Unicode, true) => "[━●]",
            (IconMode::Unicode, false) => "[○━]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_ids_resolve_per_mode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);

        for id in [IconId::MessageSquare, IconId::Image, IconId::AtSign] {
            assert!(!unicode.for_id(id).is_empty());
            assert!(!nerd.for_id(id).is_empty());
        }
        assert_eq!(unicode.for_id(IconId::AtSign), "@");
        assert_eq!(nerd.for_id(IconId::AtSign), "\u{f1fa}");
    }

    #[test]
    fn test_notification_kind_icons_are_distinct() {
        let icons = IconSet::new(IconMode::Unicode);
        let glyphs = [
            icons.for_id(IconId::MessageSquare),
            icons.for_id(IconId::Image),
            icons.for_id(IconId::AtSign),
        ];
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }

    #[test]
    fn test_switch_glyph() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.switch(true), "[━●]");
        assert_eq!(icons.switch(false), "[○━]");
    }
}
