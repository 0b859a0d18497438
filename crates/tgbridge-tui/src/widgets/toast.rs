//! Toast overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use tgbridge_app::Toast;
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette, styles};

pub struct ToastOverlay<'a> {
    toast: &'a Toast,
    icons: IconSet,
}

impl<'a> ToastOverlay<'a> {
    pub fn new(toast: &'a Toast, icons: IconSet) -> Self {
        Self { toast, icons }
    }

    /// Columns needed for the icon and message
    pub fn content_width(&self) -> u16 {
        (self.icon().width() + 1 + self.toast.message.width()) as u16
    }

    fn icon(&self) -> &'static str {
        self.icons.check()
    }
}

impl Widget for ToastOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let accent = palette::STATUS_GREEN;
        let block = styles::glass_block(false)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icon(), Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(self.toast.message.clone(), styles::text_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
