//! Telegram message text built from a Discord message
//!
//! Output uses Telegram's legacy Markdown (`*bold*`).

use crate::discord::DiscordMessage;

/// Limits applied while formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Embeds past this count are dropped
    pub max_embeds: usize,
    /// Embed descriptions are cut to this many characters
    pub description_limit: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_embeds: 3,
            description_limit: 200,
        }
    }
}

pub const HEADER: &str = "🔔 *New message from Discord*";

/// Build the Telegram message text
pub fn format_message(message: &DiscordMessage, options: &FormatOptions) -> String {
    let mut text = format!("{HEADER}\n\n👤 *{}*\n", message.username());

    if let Some(content) = message.content() {
        text.push('\n');
        text.push_str(content);
    }

    for embed in message.embeds().iter().take(options.max_embeds) {
        if let Some(title) = embed.title.as_deref().filter(|t| !t.is_empty()) {
            text.push_str(&format!("\n\n📌 *{title}*"));
        }
        if let Some(description) = embed.description.as_deref().filter(|d| !d.is_empty()) {
            text.push('\n');
            text.push_str(truncate_chars(description, options.description_limit));
        }
    }

    text
}

/// Cut `s` to at most `max` characters without splitting a code point
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
