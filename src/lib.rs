//! tgbridge - Discord to Telegram bridge
//!
//! Entry points for the three commands: the terminal dashboard, the webhook
//! relay and the status snapshot.

pub mod status;

use std::net::SocketAddr;
use std::time::Duration;

use tgbridge_app::{RelaySettings, Settings};
use tgbridge_core::prelude::*;
use tgbridge_relay::{Credentials, FormatOptions, RelayState, TelegramClient};

pub use status::StatusSnapshot;

/// Run the terminal dashboard
pub async fn run_dashboard(settings: Settings) -> Result<()> {
    let result = tgbridge_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("tgbridge exiting");
    result
}

/// Run the webhook relay until Ctrl+C
///
/// `bind` overrides `relay.bind` from the settings.
pub async fn run_relay(settings: &RelaySettings, bind: Option<&str>) -> Result<()> {
    let bind = bind.unwrap_or(&settings.bind);
    let addr: SocketAddr = bind
        .parse()
        .map_err(|e| Error::config(format!("Invalid bind address '{}': {}", bind, e)))?;

    let credentials = Credentials::from_env();
    if credentials.is_none() {
        warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set; webhook requests will fail");
    }

    let state = relay_state(settings, credentials)?;
    tgbridge_relay::serve(addr, state)
        .await
        .context("Relay server failed")
}

/// Build the relay state: a Telegram client when credentials are present
pub fn relay_state(
    settings: &RelaySettings,
    credentials: Option<Credentials>,
) -> Result<RelayState<TelegramClient>> {
    let sink = credentials
        .map(|credentials| {
            TelegramClient::new(
                &settings.telegram_api_base,
                credentials,
                Duration::from_secs(settings.timeout_secs),
            )
        })
        .transpose()?;

    Ok(RelayState::new(sink, format_options(settings)))
}

pub fn format_options(settings: &RelaySettings) -> FormatOptions {
    FormatOptions {
        max_embeds: settings.max_embeds,
        description_limit: settings.embed_description_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_from_settings() {
        let settings = RelaySettings {
            max_embeds: 1,
            embed_description_limit: 50,
            ..Default::default()
        };
        let options = format_options(&settings);
        assert_eq!(options.max_embeds, 1);
        assert_eq!(options.description_limit, 50);
    }

    #[test]
    fn test_relay_state_without_credentials() {
        let state = relay_state(&RelaySettings::default(), None).unwrap();
        assert!(state.sink.is_none());
    }

    #[test]
    fn test_relay_state_with_credentials() {
        let state = relay_state(
            &RelaySettings::default(),
            Some(Credentials::new("token", "chat")),
        )
        .unwrap();
        assert!(state.sink.is_some());
    }

    #[test]
    fn test_relay_state_rejects_bad_api_base() {
        let settings = RelaySettings {
            telegram_api_base: "::not a url".to_string(),
            ..Default::default()
        };
        let err = relay_state(&settings, Some(Credentials::new("t", "c"))).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_run_relay_rejects_bad_bind() {
        let err = run_relay(&RelaySettings::default(), Some("not-an-addr"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
