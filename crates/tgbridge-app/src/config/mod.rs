//! Configuration file parsing for tgbridge
//!
//! Supports `.tgbridge/config.toml` in the working directory, or any file
//! passed with `--config`.

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_from, load_settings_required, settings_path};
pub use types::*;
