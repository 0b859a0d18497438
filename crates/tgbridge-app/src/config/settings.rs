//! Settings parser for .tgbridge/config.toml

use std::path::{Path, PathBuf};

use tgbridge_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const TGBRIDGE_DIR: &str = ".tgbridge";

/// Path of the settings file inside `project_path`
pub fn settings_path(project_path: &Path) -> PathBuf {
    project_path.join(TGBRIDGE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<project_path>/.tgbridge/config.toml`
pub fn load_settings(project_path: &Path) -> Settings {
    load_settings_from(&settings_path(project_path))
}

/// Load settings from a file named on the command line.
///
/// Unlike the project lookup, a missing file here is an error.
pub fn load_settings_required(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }
    Ok(load_settings_from(config_path))
}

/// Load settings from a file.
///
/// A missing or unparsable file yields [`Settings::default()`].
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
