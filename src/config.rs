//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Strategy;
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for a human-vs-computer game.
///
/// ```toml
/// strategy = "alpha-beta"
/// computer_first = true
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// How the computer picks its moves.
    #[serde(default)]
    strategy: Strategy,

    /// Whether the computer makes the opening move.
    #[serde(default = "default_computer_first")]
    computer_first: bool,

    /// Seed for the randomized strategies. Fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_computer_first() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            computer_first: default_computer_first(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(strategy: Strategy, computer_first: bool, seed: Option<u64>) -> Self {
        Self {
            strategy,
            computer_first,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(strategy = %config.strategy, computer_first = config.computer_first, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        strategy: Option<Strategy>,
        human_first: bool,
        seed: Option<u64>,
    ) -> Self {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if human_first {
            self.computer_first = false;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
    /// Creates a new config error with caller location tracking.
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
