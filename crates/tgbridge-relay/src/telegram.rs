//! Telegram Bot API client
//!
//! Delivery goes through the [`MessageSink`] trait so the webhook server can
//! be driven without a live bot.

use std::time::Duration;

use serde::Serialize;
use tgbridge_core::prelude::*;
use url::Url;

use crate::error::RelayError;

pub const TOKEN_ENV_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_ENV_VAR: &str = "TELEGRAM_CHAT_ID";
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Bot token and destination chat
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl Credentials {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
    ///
    /// Returns `None` when either is unset or empty.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var(TOKEN_ENV_VAR).ok().filter(|v| !v.is_empty())?;
        let chat_id = std::env::var(CHAT_ID_ENV_VAR)
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self::new(token, chat_id))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Something that can deliver a formatted message
#[trait_variant::make(MessageSink: Send)]
pub trait LocalMessageSink {
    async fn deliver(&self, text: &str) -> std::result::Result<(), RelayError>;
}

/// `sendMessage` request body
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Client for the Telegram Bot API `sendMessage` method
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_base: Url,
    credentials: Credentials,
}

impl TelegramClient {
    pub fn new(api_base: &str, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .map_err(|e| Error::config(format!("Invalid Telegram API base '{}': {}", api_base, e)))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::telegram(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base,
            credentials,
        })
    }

    /// `{api_base}/bot{token}/sendMessage`
    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.as_str().trim_end_matches('/'),
            self.credentials.bot_token
        )
    }
}

impl MessageSink for TelegramClient {
    async fn deliver(&self, text: &str) -> std::result::Result<(), RelayError> {
        let body = SendMessage {
            chat_id: &self.credentials.chat_id,
            text,
            parse_mode: "Markdown",
        };

        let resp = self
            .http
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::OK {
            debug!("Delivered message to chat {}", self.credentials.chat_id);
            Ok(())
        } else {
            let status = resp.status();
            let body = resp.text().await?;
            warn!("Telegram rejected message ({}): {}", status, body);
            Err(RelayError::TelegramApi(body))
        }
    }
}
