//! Configuration system for Wayfarer local search.
//!
//! Load local-search configuration from TOML to choose the
//! successor-selection strategy, plateau policy and restart behaviour
//! without code changes.
//!
//! # Examples
//!
//! ```
//! use wayfarer_config::{LocalSearchConfig, StrategyConfig};
//!
//! let config = LocalSearchConfig::from_toml_str(r#"
//!     random_seed = 42
//!     max_plateau_moves = 100
//!
//!     [strategy]
//!     type = "simulated_annealing"
//!     cooling_rate = 0.05
//!
//!     [restart]
//!     max_iterations = 50
//!     quality_margin = 0.0
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert!(matches!(
//!     config.strategy,
//!     StrategyConfig::SimulatedAnnealing { .. }
//! ));
//! ```
//!
//! Use the default config when a file is missing:
//!
//! ```
//! use wayfarer_config::LocalSearchConfig;
//!
//! let config = LocalSearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with steepest ascent and no restarts.
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main local-search configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Random seed for reproducible runs. When absent, OS entropy is used.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Maximum number of consecutive moves among states of equal quality.
    #[serde(default)]
    pub max_plateau_moves: u32,

    /// Successor-selection strategy.
    #[serde(default)]
    pub strategy: StrategyConfig,

    /// Random-restart configuration. When absent, a single run is made.
    #[serde(default)]
    pub restart: Option<RestartConfig>,
}

/// Which successor-selection strategy to use.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Pick the best successor after a shuffle.
    #[default]
    SteepestAscent,

    /// Pick a non-downhill successor with quality-proportional probability.
    Stochastic,

    /// Accept downhill successors with temperature-driven probability.
    SimulatedAnnealing {
        /// Amount subtracted from the temperature before each candidate
        /// evaluation.
        cooling_rate: f64,
    },
}

/// Random-restart configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct RestartConfig {
    /// Maximum number of hill-climbing runs. Unbounded when absent.
    #[serde(default)]
    pub max_iterations: Option<u32>,

    /// Acceptable gap between a final state's quality score and the
    /// heuristic's optimal score.
    #[serde(default)]
    pub quality_margin: f64,
}

impl LocalSearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, contains invalid TOML,
    /// or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let StrategyConfig::SimulatedAnnealing { cooling_rate } = self.strategy {
            if !(cooling_rate > 0.0 && cooling_rate <= 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "cooling_rate must lie in (0, 1], got {cooling_rate}"
                )));
            }
        }
        if let Some(restart) = &self.restart {
            if restart.quality_margin < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "quality_margin must be non-negative, got {}",
                    restart.quality_margin
                )));
            }
        }
        Ok(())
    }
}
