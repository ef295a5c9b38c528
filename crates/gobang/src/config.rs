//! Game configuration.

use super::board::{DEFAULT_SIZE, MAX_SIZE};
use super::types::Stone;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new game.
///
/// Loaded from TOML:
///
/// ```toml
/// board_size = 15
/// first_turn = "black"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Color that moves first.
    #[serde(default = "default_first_turn")]
    first_turn: Stone,
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_first_turn() -> Stone {
    Stone::Black
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(board_size: usize, first_turn: Stone) -> Self {
        Self {
            board_size,
            first_turn,
        }
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Returns a copy with a different first turn.
    pub fn with_first_turn(mut self, first_turn: Stone) -> Self {
        self.first_turn = first_turn;
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.board_size == 0 {
            return Err(ConfigError::new("board_size must be greater than zero"));
        }
        if config.board_size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "board_size {} exceeds the maximum of {}",
                config.board_size, MAX_SIZE
            )));
        }
        debug!(board_size = config.board_size, first_turn = %config.first_turn, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_board_size(), default_first_turn())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
