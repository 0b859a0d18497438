//! Telegram bot status card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct BotFooter<'a> {
    bot_handle: &'a str,
    icons: IconSet,
}

impl<'a> BotFooter<'a> {
    pub fn new(bot_handle: &'a str, icons: IconSet) -> Self {
        Self { bot_handle, icons }
    }
}

impl Widget for BotFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let heading = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.send(), Style::default().fg(palette::ACCENT_SECONDARY)),
            Span::raw(" "),
            Span::styled("Telegram bot connected", styles::text_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &heading, inner.width);

        if inner.height > 1 {
            let detail = Line::from(vec![
                Span::styled("   All messages are forwarded to ", styles::text_muted()),
                Span::styled(self.bot_handle.to_string(), styles::accent_bold()),
            ]);
            buf.set_line(inner.x, inner.y + 1, &detail, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use tgbridge_app::IconMode;

    #[test]
    fn test_footer_names_bot() {
        let mut term = TestTerminal::new();
        term.render_widget(
            BotFooter::new("@relay_bot", IconSet::new(IconMode::Unicode)),
            Rect::new(0, 0, 80, 4),
        );

        assert!(term.line_contains(1, "Telegram bot connected"));
        assert!(term.line_contains(2, "All messages are forwarded to @relay_bot"));
    }

    #[test]
    fn test_footer_single_row() {
        let mut term = TestTerminal::new();
        term.render_widget(
            BotFooter::new("@relay_bot", IconSet::new(IconMode::Unicode)),
            Rect::new(0, 0, 80, 3),
        );
        assert!(term.buffer_contains("Telegram bot connected"));
        assert!(!term.buffer_contains("@relay_bot"));
    }
}
