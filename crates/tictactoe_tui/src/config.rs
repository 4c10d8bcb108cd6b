//! Settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// User-configurable settings. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Glyph drawn for player 1.
    player_one_mark: String,

    /// Glyph drawn for player 2.
    player_two_mark: String,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Where interactive sessions write their logs.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_one_mark: "X".to_string(),
            player_two_mark: "O".to_string(),
            log_filter: "info".to_string(),
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml(&content)
    }

    /// Parses and validates settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let settings = Self::from_file(path)?;
            info!("Settings loaded");
            Ok(settings)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Glyph for `player`.
    pub fn mark(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_mark,
            Player::Two => &self.player_two_mark,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one_mark.trim().is_empty() || self.player_two_mark.trim().is_empty() {
            return Err(ConfigError::new("Player marks must not be empty".to_string()));
        }
        if self.player_one_mark == self.player_two_mark {
            return Err(ConfigError::new(format!(
                "Both players use the mark {:?}",
                self.player_one_mark
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
