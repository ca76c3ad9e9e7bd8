//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::MoveOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Display preferences for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Order of the move list.
    #[serde(default)]
    move_order: MoveOrder,

    /// Bracket the squares of a winning line.
    #[serde(default = "default_highlight")]
    highlight_winning_line: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_highlight() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            highlight_winning_line: default_highlight(),
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = config.move_order.label(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit file, else [`DEFAULT_CONFIG_PATH`] if it exists,
    /// else the defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy with command-line overrides applied.
    pub fn with_overrides(mut self, descending: bool, no_highlight: bool) -> Self {
        if descending {
            self.move_order = MoveOrder::Descending;
        }
        if no_highlight {
            self.highlight_winning_line = false;
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(*config.move_order(), MoveOrder::Ascending);
        assert!(*config.highlight_winning_line());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::default().with_overrides(true, true);
        assert_eq!(*config.move_order(), MoveOrder::Descending);
        assert!(!*config.highlight_winning_line());
    }
}
