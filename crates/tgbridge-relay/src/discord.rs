//! Discord webhook payload model
//!
//! Only the fields the relay forwards are modelled. Every field is optional
//! and unknown fields are ignored.

use serde::Deserialize;

use crate::error::RelayError;

/// Username shown when the payload carries no author
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A Discord message as posted to the webhook
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordMessage {
    #[serde(default)]
    pub author: Option<DiscordAuthor>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub embeds: Option<Vec<DiscordEmbed>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordAuthor {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordEmbed {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl DiscordMessage {
    pub fn username(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.username.as_deref())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Message text, `None` when absent or empty
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    pub fn embeds(&self) -> &[DiscordEmbed] {
        self.embeds.as_deref().unwrap_or_default()
    }

    /// Nothing worth forwarding: no text and no embeds
    pub fn is_empty(&self) -> bool {
        self.content().is_none() && self.embeds().is_empty()
    }
}

/// Parse a webhook request body.
///
/// An empty body is treated as `{}`. Anything that is not a JSON object
/// is rejected as [`RelayError::InvalidJson`].
pub fn parse_payload(body: &[u8]) -> Result<DiscordMessage, RelayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DiscordMessage::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected webhook payload: {}", e);
        RelayError::InvalidJson
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let body = br#"{
            "author": {"username": "alice", "id": "42"},
            "content": "hello",
            "embeds": [{"title": "Release", "description": "v2 is out", "color": 5}]
        }"#;
        let msg = parse_payload(body).unwrap();
        assert_eq!(msg.username(), "alice");
        assert_eq!(msg.content(), Some("hello"));
        assert_eq!(msg.embeds().len(), 1);
        assert_eq!(msg.embeds()[0].title.as_deref(), Some("Release"));
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_missing_author_defaults_to_unknown() {
        let msg = parse_payload(br#"{"content": "hi"}"#).unwrap();
        assert_eq!(msg.username(), UNKNOWN_AUTHOR);

        let msg = parse_payload(br#"{"author": {}, "content": "hi"}"#).unwrap();
        assert_eq!(msg.username(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_empty_content_and_no_embeds_is_empty() {
        assert!(parse_payload(br#"{"content": ""}"#).unwrap().is_empty());
        assert!(parse_payload(br#"{"embeds": []}"#).unwrap().is_empty());
        assert!(parse_payload(br#"{"content": null, "embeds": null}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_embeds_only_is_not_empty() {
        let msg = parse_payload(br#"{"embeds": [{}]}"#).unwrap();
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_empty_body_reads_as_empty_object() {
        assert!(parse_payload(b"").unwrap().is_empty());
        assert!(parse_payload(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            parse_payload(b"{not json"),
            Err(RelayError::InvalidJson)
        ));
        assert!(matches!(
            parse_payload(b"[1, 2, 3]"),
            Err(RelayError::InvalidJson)
        ));
    }
}
