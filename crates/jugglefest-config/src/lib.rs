//! Configuration system for the JuggleFest matcher.
//!
//! Load run configuration from TOML files to control the completion phase
//! ordering and the output location without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use jugglefest_config::{AssignConfig, CompletionOrder};
//!
//! let config = AssignConfig::from_toml_str(r#"
//!     completion_order = "load_order"
//!     output_path = "out.txt"
//! "#).unwrap();
//!
//! assert_eq!(config.completion_order, CompletionOrder::LoadOrder);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use jugglefest_config::AssignConfig;
//!
//! let config = AssignConfig::load("jugglefest.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The output filename used when the configuration does not name one.
pub const DEFAULT_OUTPUT_PATH: &str = "juggler-circuit-assignments.txt";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which under-filled circuit the completion phase services first.
///
/// The algorithm's total score does not depend on this order, but when the
/// exhausted pool is smaller than the combined shortfall it decides which
/// circuit stays short. Pinning it keeps runs reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOrder {
    /// Circuits sorted by name. The default; fully deterministic.
    #[default]
    CircuitName,
    /// Circuits in input-file order.
    LoadOrder,
}

/// Main run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AssignConfig {
    /// Order in which the completion phase services under-filled circuits.
    #[serde(default)]
    pub completion_order: CompletionOrder,

    /// Where the assignment report is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

impl Default for AssignConfig {
    fn default() -> Self {
        AssignConfig {
            completion_order: CompletionOrder::default(),
            output_path: default_output_path(),
        }
    }
}

impl AssignConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the completion phase ordering.
    pub fn with_completion_order(mut self, order: CompletionOrder) -> Self {
        self.completion_order = order;
        self
    }

    /// Sets the output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests;
