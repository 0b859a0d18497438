//! Relay errors and their HTTP mapping
//!
//! Every error answers with `{"error": "<message>"}` and the CORS origin
//! header, so browser clients can read failures too.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// HTTP 405.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Bot token or chat id missing. HTTP 500.
    #[error("Telegram credentials not configured")]
    CredentialsMissing,

    /// Body is not a JSON object. HTTP 400.
    #[error("Invalid JSON")]
    InvalidJson,

    /// Telegram answered with a non-200 status. HTTP 500.
    #[error("Telegram API error: {0}")]
    TelegramApi(String),

    /// Request to Telegram never completed. HTTP 500.
    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidJson => StatusCode::BAD_REQUEST,
            RelayError::CredentialsMissing
            | RelayError::TelegramApi(_)
            | RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL embeds the bot token
        RelayError::Transport(err.without_url().to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.to_string() });
        (
            status,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            axum::Json(body),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            RelayError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(RelayError::InvalidJson.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::CredentialsMissing.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::TelegramApi("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::Transport("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RelayError::TelegramApi(r#"{"ok":false}"#.into()).to_string(),
            r#"Telegram API error: {"ok":false}"#
        );
        assert_eq!(
            RelayError::Transport("connection refused".into()).to_string(),
            "connection refused"
        );
    }

    #[tokio::test]
    async fn test_json_response_format() {
        let resp = RelayError::InvalidJson.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Invalid JSON"}));
    }
}
