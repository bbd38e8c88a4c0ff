//! # Simulation Configuration
//!
//! Loaded once at startup from TOML; immutable afterwards. The seat count
//! in particular is fixed before the monitor is built - capacity never
//! changes mid-run.
//!
//! ```toml
//! seats = 3
//! customers = 10
//! arrival_interval_ms = 3000
//! haircut_min_ms = 1000
//! haircut_max_ms = 5000
//! rng_seed = 1984
//! event_capacity = 1024
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors loading the simulation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`SimConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parse but make no sense together.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Simulation configuration.
///
/// Every field has a default matching the original simulation (arrivals
/// every 3 seconds, haircuts between 1 and 5 seconds), so an empty TOML
/// document is a valid config.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Seats in the waiting room. Zero turns every customer away.
    pub seats: usize,
    /// Total number of arrivals to simulate.
    pub customers: usize,
    /// Milliseconds between consecutive arrivals.
    pub arrival_interval_ms: u64,
    /// Minimum haircut duration in milliseconds.
    pub haircut_min_ms: u64,
    /// Maximum haircut duration in milliseconds.
    pub haircut_max_ms: u64,
    /// Seed for the haircut RNG. Same seed, same simulation.
    pub rng_seed: u64,
    /// Bounded capacity of the observer event channel.
    pub event_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seats: 3,
            customers: 10,
            arrival_interval_ms: 3000,
            haircut_min_ms: 1000,
            haircut_max_ms: 5000,
            rng_seed: 1984,
            event_capacity: 1024,
        }
    }
}

impl SimConfig {
    /// Parses a config from a TOML string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed or unknown fields,
    /// [`ConfigError::Invalid`] on an inverted haircut range or a zero
    /// event capacity.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file from disk.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, plus everything
    /// [`Self::from_toml_str`] can return.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Returns the pause between consecutive arrivals.
    #[must_use]
    pub const fn arrival_interval(&self) -> Duration {
        Duration::from_millis(self.arrival_interval_ms)
    }

    /// Returns the `(min, max)` haircut duration range.
    #[must_use]
    pub const fn haircut_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.haircut_min_ms),
            Duration::from_millis(self.haircut_max_ms),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.haircut_min_ms > self.haircut_max_ms {
            return Err(ConfigError::Invalid(format!(
                "haircut range is inverted: {} ms > {} ms",
                self.haircut_min_ms, self.haircut_max_ms
            )));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid(
                "event_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_the_default() {
        let config = SimConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SimConfig::from_toml_str("seats = 0\ncustomers = 2\n").unwrap();
        assert_eq!(config.seats, 0);
        assert_eq!(config.customers, 2);
        assert_eq!(config.arrival_interval_ms, 3000);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            SimConfig::from_toml_str("chairs = 3\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_inverted_haircut_range_is_rejected() {
        let raw = "haircut_min_ms = 500\nhaircut_max_ms = 100\n";
        assert!(matches!(
            SimConfig::from_toml_str(raw),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_duration_accessors() {
        let config = SimConfig::default();
        assert_eq!(config.arrival_interval(), Duration::from_secs(3));
        assert_eq!(
            config.haircut_range(),
            (Duration::from_secs(1), Duration::from_secs(5))
        );
    }
}
