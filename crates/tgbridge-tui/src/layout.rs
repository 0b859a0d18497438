//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header, stat cards and footer containers (borders + 2 rows)
const CARD_HEIGHT: u16 = 4;

/// Screen areas for the dashboard
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Row of three stat cards
    pub stats: [Rect; 3],
    pub channels: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Create the dashboard layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, stats, content, footer] = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(CARD_HEIGHT),
    ])
    .areas(area);

    let stats = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(stats);

    let [channels, notifications] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(content);

    ScreenAreas {
        header,
        stats,
        channels,
        notifications,
        footer,
    }
}

/// Area for a toast of `content_width` columns, anchored above the footer
/// on the right edge
pub fn toast_area(areas: &ScreenAreas, content_width: u16) -> Rect {
    let frame = areas.header.union(areas.footer);
    let width = content_width
        .saturating_add(4) // borders + padding
        .min(frame.width);
    let height = 3u16.min(frame.height);
    let x = frame.right().saturating_sub(width);
    let y = areas.footer.y.saturating_sub(height).max(frame.y);

    Rect::new(x, y, width, height)
}
