//! Configuration module for the deduplication tool.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML or
//! JSON), then environment variables prefixed with `IBF` (for example
//! `IBF__FILTER__CAPACITY=1048576`), then explicit overrides such as a
//! command-line capacity. All values are validated once, after every layer
//! has been applied.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::data_structures::{InverseBloomFilterConfig, MAX_SIZE};
use crate::error::config::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "IBF";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the deduplication tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DedupConfig {
    /// Filter sizing
    pub filter: InverseBloomFilterConfig,

    /// Input record handling
    pub input: InputConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for DedupConfig {
    fn validate(&self) -> ConfigResult<()> {
        Validate::validate(&self.filter)?;
        self.input.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl Validate for InverseBloomFilterConfig {
    fn validate(&self) -> ConfigResult<()> {
        InverseBloomFilterConfig::validate(self).map_err(|e| ConfigError::ValueOutOfRange {
            key: "filter.capacity".to_string(),
            message: format!("{e} (got {}, expected 1..={MAX_SIZE})", self.capacity),
        })
    }
}

/// How input records are turned into filter keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Strip leading and trailing ASCII whitespace before observing a record
    pub trim_whitespace: bool,

    /// Pass empty records through without observing them
    pub skip_empty: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: false,
            skip_empty: true,
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the deduplication tool.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
    capacity_override: Option<i64>,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
            capacity_override: None,
        }
    }

    /// Replace the filter capacity from every other source with `capacity`.
    pub fn with_capacity_override(mut self, capacity: Option<i64>) -> Self {
        self.capacity_override = capacity;
        self
    }

    /// Loads the configuration from a file, environment variables and overrides.
    ///
    /// # Returns
    ///
    /// * `Ok(DedupConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<DedupConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&DedupConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        if let Some(capacity) = self.capacity_override {
            builder = builder
                .set_override("filter.capacity", capacity)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        }

        let config = builder
            .build()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let dedup_config: DedupConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        dedup_config.validate()?;
        tracing::debug!(?dedup_config, "configuration loaded");

        Ok(dedup_config)
    }
}
