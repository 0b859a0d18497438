//! # tgbridge-app - Dashboard State and Orchestration
//!
//! Implements the Elm Architecture (TEA) for the bridge dashboard:
//! [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update()`] the transition function. Independent of any
//! terminal library; the TUI feeds [`InputKey`] events in.
//!
//! ## Public API
//!
//! - [`ChannelStore`] / [`InMemoryChannelStore`] - Channel records, toggles and aggregates
//! - [`AppState`] - Dashboard model (store, feed, selection, toast)
//! - [`Message`] / [`UpdateResult`] - TEA messages and update results
//! - [`Settings`] / [`load_settings()`] - `.tgbridge/config.toml`
//! - [`Toast`] - Transient confirmation messages
//! - [`signals::spawn_signal_handler()`] - SIGINT/SIGTERM to [`Message::Quit`]

pub mod channel_store;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;
pub mod toast;

pub use channel_store::{ChannelStore, InMemoryChannelStore, ToggleOutcome};
pub use config::{
    load_settings, load_settings_from, load_settings_required, IconMode, RelaySettings, Settings,
    UiSettings,
};
pub use handler::{handle_key, update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
pub use toast::Toast;
