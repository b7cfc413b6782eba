//! Persistent application configuration.
//!
//! Stored as TOML in the platform config directory via confy. Missing fields
//! fall back to their defaults so older files keep loading.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "latex-uploader";
const CONFIG_NAME: &str = "config";

/// Backend the client talks to unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Configuration schema version
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// Base URL of the conversion backend, without the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Directory the file dialog opened last
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
}

fn default_config_version() -> u32 {
    1
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_window_width() -> f32 {
    600.0
}

fn default_window_height() -> f32 {
    600.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            base_url: default_base_url(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            last_directory: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, CONFIG_NAME)
    }

    /// Load from disk, falling back to defaults if the file is unreadable.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Could not load configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }

    pub fn get_config_path() -> Result<PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
    }

    /// Apply command line overrides; they are not written back to disk.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            let url = url.trim();
            if !url.is_empty() {
                self.base_url = url.to_string();
            }
        }
        self
    }
}
