//! Configuration loading for the transfer market
//!
//! A single JSON file describes:
//! - League rules (transfer cap, valuation bounds, clause multiplier)
//! - Where league state and history are stored
//! - The daily intake schedule
//! - Engine buffer sizes
//!
//! Every field has a default, so `{}` is a valid configuration.

use liga_core::MarketRules;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::application::MarketEngineConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default = "default_league_name")]
    pub name: String,

    /// Directory holding `league.json` and `history.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub rules: MarketRules,

    #[serde(default)]
    pub intake: IntakeConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_league_name() -> String {
    "Liga".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: default_league_name(),
            data_dir: default_data_dir(),
            rules: MarketRules::default(),
            intake: IntakeConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl LeagueConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LIGA_*` environment overrides
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok());
        self.validate()?;
        Ok(self)
    }

    /// Reject values the scheduler and engine channels cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intake.interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "intake.interval_secs must be at least 1".to_string(),
            ));
        }
        if self.engine.command_buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "engine.command_buffer_size must be at least 1".to_string(),
            ));
        }
        if self.engine.announcement_capacity == 0 {
            return Err(ConfigError::Invalid(
                "engine.announcement_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("LIGA_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("LIGA_DAILY_ADD_COUNT") {
            match raw.parse() {
                Ok(count) => self.intake.count = count,
                Err(_) => warn!("Ignoring LIGA_DAILY_ADD_COUNT={}: not a number", raw),
            }
        }
        if let Some(raw) = lookup("LIGA_AUTO_DAILY_ADD") {
            match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.intake.enabled = true,
                "0" | "false" | "no" | "off" => self.intake.enabled = false,
                _ => warn!("Ignoring LIGA_AUTO_DAILY_ADD={}: not a boolean", raw),
            }
        }
    }

    pub fn engine_config(&self) -> MarketEngineConfig {
        MarketEngineConfig {
            command_buffer_size: self.engine.command_buffer_size,
            rng_seed: self.intake.seed,
        }
    }
}

/// Daily intake schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default = "default_intake_enabled")]
    pub enabled: bool,
    #[serde(default = "default_intake_interval_secs")]
    pub interval_secs: u64,
    /// Players added per run
    #[serde(default = "default_intake_count")]
    pub count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_intake_enabled() -> bool {
    true
}

fn default_intake_interval_secs() -> u64 {
    24 * 60 * 60
}

fn default_intake_count() -> usize {
    10
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            enabled: default_intake_enabled(),
            interval_secs: default_intake_interval_secs(),
            count: default_intake_count(),
            seed: None,
        }
    }
}

impl IntakeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Engine buffer sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_command_buffer_size")]
    pub command_buffer_size: usize,
    #[serde(default = "default_announcement_capacity")]
    pub announcement_capacity: usize,
}

fn default_command_buffer_size() -> usize {
    1024
}

fn default_announcement_capacity() -> usize {
    256
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: default_command_buffer_size(),
            announcement_capacity: default_announcement_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = LeagueConfig::from_json("{}").unwrap();

        assert_eq!(config.name, "Liga");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.rules, MarketRules::default());
        assert!(config.intake.enabled);
        assert_eq!(config.intake.interval(), Duration::from_secs(86_400));
        assert_eq!(config.intake.count, 10);
        assert_eq!(config.engine.command_buffer_size, 1024);
        assert_eq!(config.engine.announcement_capacity, 256);
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "name": "Liga Sur",
            "rules": { "valuation_budget": "80" },
            "intake": { "count": 3, "seed": 9 }
        }"#;
        let config = LeagueConfig::from_json(json).unwrap();

        assert_eq!(config.name, "Liga Sur");
        assert_eq!(config.rules.valuation_budget, dec!(80));
        assert_eq!(config.rules.max_transfers_per_window, 3);
        assert_eq!(config.intake.count, 3);
        assert_eq!(config.engine_config().rng_seed, Some(9));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            LeagueConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LeagueConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_zero_sizes_are_rejected() {
        for json in [
            r#"{ "intake": { "interval_secs": 0 } }"#,
            r#"{ "engine": { "command_buffer_size": 0 } }"#,
            r#"{ "engine": { "announcement_capacity": 0 } }"#,
        ] {
            assert!(
                matches!(LeagueConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "accepted {}",
                json
            );
        }

        let mut config = LeagueConfig::default();
        assert!(config.validate().is_ok());
        config.intake.interval_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LIGA_DATA_DIR", "/tmp/liga"),
            ("LIGA_DAILY_ADD_COUNT", "4"),
            ("LIGA_AUTO_DAILY_ADD", "off"),
        ]
        .into_iter()
        .collect();

        let mut config = LeagueConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/tmp/liga"));
        assert_eq!(config.intake.count, 4);
        assert!(!config.intake.enabled);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = LeagueConfig::default();
        config.apply_overrides(|key| match key {
            "LIGA_DAILY_ADD_COUNT" => Some("many".to_string()),
            "LIGA_AUTO_DAILY_ADD" => Some("maybe".to_string()),
            _ => None,
        });

        assert_eq!(config.intake.count, 10);
        assert!(config.intake.enabled);
    }
}
