//! # tgbridge-relay - Discord to Telegram Relay
//!
//! Receives Discord message payloads over HTTP and forwards them to a
//! Telegram chat through the Bot API.
//!
//! Depends on [`tgbridge_core`] for error handling and logging.
//!
//! ## Public API
//!
//! ### Payload Parsing
//! - [`DiscordMessage`] - Webhook payload (author, content, embeds)
//! - [`parse_payload()`] - Parse a request body
//!
//! ### Formatting
//! - [`format_message()`] - Build the Telegram Markdown text
//! - [`FormatOptions`] - Embed count and description length limits
//!
//! ### Delivery
//! - [`MessageSink`] - Async delivery seam
//! - [`TelegramClient`] - `sendMessage` client
//! - [`Credentials`] - Bot token and chat id (from `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID`)
//!
//! ### Server
//! - [`router()`] - axum router for `/webhook`, `/` and `/health`
//! - [`serve()`] - Bind and serve until Ctrl+C

pub mod discord;
pub mod error;
pub mod format;
pub mod server;
pub mod telegram;

pub use discord::{parse_payload, DiscordAuthor, DiscordEmbed, DiscordMessage};
pub use error::RelayError;
pub use format::{format_message, FormatOptions};
pub use server::{router, serve, RelayState};
pub use telegram::{Credentials, LocalMessageSink, MessageSink, TelegramClient, DEFAULT_API_BASE};
