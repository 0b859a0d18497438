//! Summary cards: active channels, total messages, system status

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::format_count;
use crate::theme::{icons::IconSet, palette, styles};

/// The three stat cards, rendered into the areas from `layout::create`
pub struct StatCards {
    active_channels: usize,
    total_messages: u64,
    notification_count: usize,
    icons: IconSet,
}

impl StatCards {
    pub fn new(
        active_channels: usize,
        total_messages: u64,
        notification_count: usize,
        icons: IconSet,
    ) -> Self {
        Self {
            active_channels,
            total_messages,
            notification_count,
            icons,
        }
    }

    pub fn render(&self, areas: [Rect; 3], buf: &mut Buffer) {
        let active = Card {
            icon: Span::styled(self.icons.activity(), Style::default().fg(palette::ACCENT_PRIMARY)),
            marker: Some(Span::styled(
                self.icons.dot(),
                Style::default().fg(palette::STATUS_GREEN),
            )),
            value: self.active_channels.to_string(),
            label: "Active channels",
        };
        active.render(areas[0], buf);

        let total = Card {
            icon: Span::styled(self.icons.message(), Style::default().fg(palette::ACCENT_SECONDARY)),
            marker: None,
            value: format_count(self.total_messages),
            label: "Total messages",
        };
        total.render(areas[1], buf);

        let status = Card {
            icon: Span::styled(self.icons.bell(), Style::default().fg(palette::ACCENT_WARM)),
            marker: Some(Span::styled(
                format!(" {} ", self.notification_count),
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::ACCENT_WARM),
            )),
            value: "Online".to_string(),
            label: "System operational",
        };
        status.render(areas[2], buf);
    }
}

/// One bordered card: icon and value on the first row, label below,
/// optional marker right-aligned on the first row
struct Card {
    icon: Span<'static>,
    marker: Option<Span<'static>>,
    value: String,
    label: &'static str,
}

impl Widget for Card {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let value_line = Line::from(vec![
            Span::raw(" "),
            self.icon,
            Span::raw(" "),
            Span::styled(
                self.value,
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let value_width = value_line.width() as u16;
        buf.set_line(inner.x, inner.y, &value_line, inner.width);

        if let Some(marker) = self.marker {
            let marker_line = Line::from(vec![marker, Span::raw(" ")]);
            let marker_width = marker_line.width() as u16;
            if value_width + marker_width < inner.width {
                buf.set_line(inner.right() - marker_width, inner.y, &marker_line, marker_width);
            }
        }

        if inner.height > 1 {
            let label = Line::from(Span::styled(format!(" {}", self.label), styles::text_muted()));
            buf.set_line(inner.x, inner.y + 1, &label, inner.width);
        }
    }
}
