//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use tgbridge_app::AppState;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete dashboard (View function in TEA)
///
/// Pure with respect to `state`; aggregates are read through the store on
/// every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(icons), areas.header);

    let cards = widgets::StatCards::new(
        state.channels.active_channels(),
        state.channels.total_messages(),
        state.notifications.len(),
        icons,
    );
    cards.render(areas.stats, frame.buffer_mut());

    frame.render_widget(
        widgets::ChannelList::new(state.channels.channels(), state.selected, icons),
        areas.channels,
    );
    frame.render_widget(
        widgets::NotificationFeed::new(&state.notifications, icons),
        areas.notifications,
    );
    frame.render_widget(
        widgets::BotFooter::new(&state.settings.ui.bot_handle, icons),
        areas.footer,
    );

    if let Some(toast) = &state.toast {
        let overlay = widgets::ToastOverlay::new(toast, icons);
        let toast_area = layout::toast_area(&areas, overlay.content_width());
        frame.render_widget(overlay, toast_area);
    }
}
