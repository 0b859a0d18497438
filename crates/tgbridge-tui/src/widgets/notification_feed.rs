//! Recent notifications panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tgbridge_core::Notification;

use super::truncate_to_width;
use crate::theme::{icons::IconSet, palette, styles};

pub struct NotificationFeed<'a> {
    notifications: &'a [Notification],
    icons: IconSet,
}

impl<'a> NotificationFeed<'a> {
    pub fn new(notifications: &'a [Notification], icons: IconSet) -> Self {
        Self {
            notifications,
            icons,
        }
    }

    fn entry(&self, notification: &Notification, width: u16) -> [Line<'static>; 2] {
        let heading = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                self.icons.for_id(notification.kind.icon()),
                Style::default().fg(palette::ACCENT_WARM),
            ),
            Span::raw(" "),
            Span::styled(
                format!("#{}", notification.channel),
                Style::default()
                    .fg(palette::ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(notification.time.clone(), styles::text_muted()),
        ]);

        let body = Line::from(vec![
            Span::raw("   "),
            Span::styled(
                truncate_to_width(&notification.message, (width as usize).saturating_sub(4)),
                styles::text_primary(),
            ),
        ]);

        [heading, body]
    }

    /// Disabled: there is no older history to page in
    fn load_more(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.refresh(), styles::text_muted()),
            Span::styled(" Load more ", styles::text_muted()),
            Span::styled("[m]", styles::text_muted()),
        ])
    }
}

impl Widget for NotificationFeed<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.bell(), Style::default().fg(palette::ACCENT_WARM)),
            Span::styled(" Recent notifications ", styles::text_bold()),
        ]);
        let block = styles::glass_block(false)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let subtitle = Line::from(Span::styled(
            " Live feed of Discord messages",
            styles::text_muted(),
        ));
        buf.set_line(inner.x, inner.y, &subtitle, inner.width);

        // Last row is reserved for the load-more hint
        let mut y = inner.y + 1;
        let list_bottom = inner.bottom().saturating_sub(1);

        if self.notifications.is_empty() && y < list_bottom {
            let empty = Line::from(Span::styled(
                " No notifications yet",
                styles::text_secondary(),
            ));
            buf.set_line(inner.x, y, &empty, inner.width);
        }

        for notification in self.notifications {
            if y >= list_bottom {
                break;
            }
            let [heading, body] = self.entry(notification, inner.width);
            buf.set_line(inner.x, y, &heading, inner.width);
            if y + 1 < list_bottom {
                buf.set_line(inner.x, y + 1, &body, inner.width);
            }
            y += 2;
        }

        if inner.height > 1 {
            buf.set_line(inner.x, inner.bottom() - 1, &self.load_more(), inner.width);
        }
    }
}
