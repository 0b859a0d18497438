//! Header bar widget
//!
//! Title, tagline and keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

const TITLE: &str = "Discord → Telegram Bridge";
const TAGLINE: &str = "Manage message flow between platforms in real time";

/// Main header showing the app title and keybindings
pub struct MainHeader {
    icons: IconSet,
}

impl MainHeader {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn shortcuts() -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in [("j/k", "Select"), ("space", "Toggle"), ("q", "Quit")] {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.zap(), Style::default().fg(palette::ACCENT_PRIMARY)),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Shortcuts right-aligned when they fit next to the title
        let shortcuts = Self::shortcuts();
        let shortcuts_width = shortcuts.width() as u16;
        if title_width + shortcuts_width + 2 <= inner.width {
            let x = inner.right() - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }

        if inner.height > 1 {
            let tagline = Line::from(Span::styled(format!(" {}", TAGLINE), styles::text_secondary()));
            buf.set_line(inner.x, inner.y + 1, &tagline, inner.width);
        }
    }
}
