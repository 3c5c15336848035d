//! walkgen configuration management.
//!
//! Handles loading of configuration from TOML files with environment
//! variable override support. Command-line flags take precedence over both.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use walk_core::walk::{DEFAULT_START_VALUE, DEFAULT_VOLATILITY};

use crate::render::OutputFormat;

/// Default walk parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalkDefaults {
    /// Step bound
    #[serde(default = "default_volatility")]
    pub volatility: i64,

    /// Starting value
    #[serde(default = "default_start_value")]
    pub start_value: i64,

    /// Fixed seed; absent means time-derived
    pub seed: Option<u64>,
}

fn default_volatility() -> i64 {
    DEFAULT_VOLATILITY
}

fn default_start_value() -> i64 {
    DEFAULT_START_VALUE
}

impl Default for WalkDefaults {
    fn default() -> Self {
        Self {
            volatility: default_volatility(),
            start_value: default_start_value(),
            seed: None,
        }
    }
}

/// walkgen configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WalkgenConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format (table, json, csv)
    #[serde(default = "default_format")]
    pub format: String,

    /// Walk parameter defaults
    #[serde(default)]
    pub walk: WalkDefaults,

    /// Environment overrides that failed to parse, keyed by walk setting
    #[serde(skip)]
    override_errors: BTreeMap<&'static str, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for WalkgenConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_format(),
            walk: WalkDefaults::default(),
            override_errors: BTreeMap::new(),
        }
    }
}

impl WalkgenConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Malformed numeric values are recorded rather than applied. They are
    /// reported by [`validate`](Self::validate) and by [`checked`](Self::checked)
    /// whenever the affected setting is actually used.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(log_level) = lookup("WALKGEN_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("WALKGEN_FORMAT") {
            self.format = format;
        }

        if let Some(volatility) = lookup("WALKGEN_VOLATILITY") {
            if let Some(volatility) = self.parse_override("volatility", "WALKGEN_VOLATILITY", &volatility) {
                self.walk.volatility = volatility;
            }
        }

        if let Some(start_value) = lookup("WALKGEN_START_VALUE") {
            if let Some(start_value) =
                self.parse_override("start_value", "WALKGEN_START_VALUE", &start_value)
            {
                self.walk.start_value = start_value;
            }
        }

        if let Some(seed) = lookup("WALKGEN_SEED") {
            if let Some(seed) = self.parse_override("seed", "WALKGEN_SEED", &seed) {
                self.walk.seed = Some(seed);
            }
        }

        self
    }

    fn parse_override<T: FromStr>(&mut self, field: &'static str, key: &str, raw: &str) -> Option<T> {
        match raw.trim().parse() {
            Ok(value) => {
                self.override_errors.remove(field);
                Some(value)
            }
            Err(_) => {
                self.override_errors
                    .insert(field, format!("{}='{}' is not a valid {}", key, raw, field));
                None
            }
        }
    }

    /// Returns `value` unless the environment override for `field` was malformed
    pub fn checked<T>(&self, field: &str, value: T) -> Result<T, ConfigError> {
        match self.override_errors.get(field) {
            Some(message) => Err(ConfigError::Validation(vec![message.clone()])),
            None => Ok(value),
        }
    }

    /// Validate the log level
    pub fn validate_log_level(&self) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::Validation(vec![format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            )]))
        }
    }

    /// Resolved output format
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.format
            .parse()
            .map_err(|e: String| ConfigError::Validation(vec![e]))
    }

    /// Validate the configuration
    ///
    /// Checks every setting, including walk defaults that command-line flags
    /// may later replace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(ConfigError::Validation(mut log_errors)) = self.validate_log_level() {
            errors.append(&mut log_errors);
        }

        if let Err(e) = self.format.parse::<OutputFormat>() {
            errors.push(e);
        }

        if self.walk.volatility <= 0 {
            errors.push(format!(
                "walk.volatility must be greater than 0, got {}",
                self.walk.volatility
            ));
        }

        errors.extend(self.override_errors.values().cloned());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
