//! Configuration handling for the TUI

use crate::state::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Tick interval used when the config does not override it
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid JSON
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShowcaseConfig {
    /// Theme to start in ("dark" or "light")
    pub theme: Option<String>,
    /// Tick interval in milliseconds
    pub tick_rate_ms: Option<u64>,
}

impl ShowcaseConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "showcase", "showcase-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file; a missing file yields the defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ShowcaseConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Theme the app starts in; unknown names fall back to the default
    pub fn initial_theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or_default()
    }

    /// Tick interval for animations and timed state
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS))
    }
}
