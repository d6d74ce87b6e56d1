use chrono::format::{Item, StrftimeItems};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/feedback-widget/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("feedback-widget").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Durations are non-zero
    /// - The timestamp pattern is a valid strftime pattern
    /// - The log level parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ui = &self.ui;
        for (name, value) in [
            ("ui.notification_ms", ui.notification_ms),
            ("ui.acknowledge_ms", ui.acknowledge_ms),
            ("ui.tick_ms", ui.tick_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be greater than zero"),
                });
            }
        }

        if ui.timestamp_format.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "ui.timestamp_format must not be empty".to_string(),
            });
        }
        if StrftimeItems::new(&ui.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.timestamp_format '{}' is not a valid strftime pattern",
                    ui.timestamp_format
                ),
            });
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown log level '{}'", self.logging.level),
            });
        }

        Ok(())
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.ui.notification_ms)
    }

    pub fn acknowledge_duration(&self) -> Duration {
        Duration::from_millis(self.ui.acknowledge_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }
}
