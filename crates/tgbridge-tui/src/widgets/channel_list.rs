//! Connected channels panel
//!
//! Each channel takes two rows: switch, name, status dot and server on the
//! first; message count, live badge and last-message preview on the second.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tgbridge_core::{Channel, ChannelStatus};

use super::truncate_to_width;
use crate::theme::{icons::IconSet, palette, styles};

const ROWS_PER_CHANNEL: u16 = 2;

pub struct ChannelList<'a> {
    channels: &'a [Channel],
    selected: usize,
    icons: IconSet,
}

impl<'a> ChannelList<'a> {
    pub fn new(channels: &'a [Channel], selected: usize, icons: IconSet) -> Self {
        Self {
            channels,
            selected,
            icons,
        }
    }

    fn title(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.link(), Style::default().fg(palette::ACCENT_PRIMARY)),
            Span::styled(" Connected channels ", styles::text_bold()),
        ])
    }

    fn primary_row(&self, index: usize, channel: &Channel) -> Line<'static> {
        let status = channel.status();
        let switch_style = if channel.connected {
            Style::default().fg(palette::STATUS_GREEN)
        } else {
            styles::text_muted()
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", index + 1), styles::keybinding()),
            Span::styled(self.icons.switch(channel.connected), switch_style),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", channel.initial()),
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(channel.display_name(), styles::text_bold()),
            Span::raw(" "),
            Span::styled(self.icons.dot(), styles::status(status.color())),
            Span::raw(" "),
            Span::styled(channel.server.clone(), styles::text_secondary()),
        ];

        if let Some(fault) = &channel.last_error {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                fault.clone(),
                Style::default().fg(palette::STATUS_RED),
            ));
        }

        Line::from(spans)
    }

    fn detail_row(&self, channel: &Channel, width: u16) -> Line<'static> {
        let mut spans = vec![
            Span::raw("      "),
            Span::styled(self.icons.message(), styles::text_muted()),
            Span::raw(" "),
            Span::styled(channel.messages_count.to_string(), styles::text_secondary()),
        ];

        if channel.status() == ChannelStatus::Active {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} Live", self.icons.zap()),
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        if let Some(preview) = &channel.last_message {
            let used = Line::from(spans.clone()).width() + 3;
            let room = (width as usize).saturating_sub(used);
            if room > 1 {
                spans.push(Span::styled(" · ", styles::text_muted()));
                spans.push(Span::styled(
                    truncate_to_width(preview, room),
                    styles::text_muted(),
                ));
            }
        }

        Line::from(spans)
    }
}

impl Widget for ChannelList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(self.title())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let subtitle = Line::from(Span::styled(
            " Manage Discord channel sync",
            styles::text_muted(),
        ));
        buf.set_line(inner.x, inner.y, &subtitle, inner.width);

        if self.channels.is_empty() {
            if inner.height > 2 {
                let empty = Line::from(Span::styled(
                    " No channels configured",
                    styles::text_secondary(),
                ));
                buf.set_line(inner.x, inner.y + 2, &empty, inner.width);
            }
            return;
        }

        // Keep the selected channel on screen
        let list_top = inner.y + 1;
        let list_height = inner.height.saturating_sub(1);
        let visible = (list_height / ROWS_PER_CHANNEL).max(1) as usize;
        let first = self.selected.saturating_sub(visible - 1);

        for (offset, (index, channel)) in self
            .channels
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .enumerate()
        {
            let y = list_top + offset as u16 * ROWS_PER_CHANNEL;
            if y >= inner.bottom() {
                break;
            }

            let row_area = Rect::new(inner.x, y, inner.width, 1);
            if index == self.selected {
                buf.set_style(row_area, styles::focused_selected());
            }
            // set_line clips at the panel edge
            buf.set_line(inner.x, y, &self.primary_row(index, channel), inner.width);

            if y + 1 < inner.bottom() {
                let detail = self.detail_row(channel, inner.width);
                buf.set_line(inner.x, y + 1, &detail, inner.width);
            }
        }
    }
}
