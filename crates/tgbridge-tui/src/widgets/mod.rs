//! Dashboard widgets

mod bot_footer;
mod channel_list;
mod header;
mod notification_feed;
mod stat_cards;
mod toast;

pub use bot_footer::BotFooter;
pub use channel_list::ChannelList;
pub use header::MainHeader;
pub use notification_feed::NotificationFeed;
pub use stat_cards::StatCards;
pub use toast::ToastOverlay;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Group digits in thousands: `1899` -> `1,899`
pub(crate) fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
