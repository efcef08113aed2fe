//! Configuration loading and storage.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/debrief/config.toml` on Linux). Missing fields fall back
//! to their defaults, so a partial file stays valid across upgrades.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::state::{DEFAULT_FAST_RATE, DEFAULT_SKIP_SECS};

/// Default base URL of the transform service.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend URL.
pub const BACKEND_URL_ENV: &str = "DEBRIEF_BACKEND_URL";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Transform service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the transform service, no trailing slash.
    pub url: String,
    /// Request timeout in seconds; absent means no timeout.
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Playback control tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seconds moved by one relative skip.
    pub skip_secs: f64,
    /// Rate used by the fast toggle and the hold gesture.
    pub fast_rate: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_secs: DEFAULT_SKIP_SECS,
            fast_rate: DEFAULT_FAST_RATE,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub playback: PlaybackConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads the config file, or defaults when none exists. The
    /// `DEBRIEF_BACKEND_URL` environment variable overrides the backend
    /// URL either way.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            toml::from_str(&fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };
        Ok(config.apply_env())
    }

    /// Writes the config as pretty TOML, creating the directory first.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Path of the config file under the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("debrief").join("config.toml"))
    }

    /// Configured request timeout, when any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.backend.request_timeout_secs.map(Duration::from_secs)
    }

    fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.is_empty() {
                self.backend.url = url;
            }
        }
        self
    }
}
