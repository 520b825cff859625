//! Kernel configuration with TOML file support.

use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vital_supply::FeePolicy;
use vital_types::{KernelParams, ParamsError, SupplyEquilibriumParams};

/// Configuration for the kernel.
///
/// Can be loaded from a TOML file via [`KernelConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so an
/// empty file yields a runnable configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Supply-equilibrium policy: cap, threshold, burn rates.
    #[serde(default)]
    pub supply: SupplyEquilibriumParams,

    /// Verification economics: reward, price, score floor, freshness, quorum.
    #[serde(default)]
    pub kernel: KernelParams,

    /// Which fee split applies: "dynamic-split" or "four-equal-pools".
    #[serde(default)]
    pub fee_policy: FeePolicy,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration failures, caught before the kernel starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("unknown log format {0:?} (expected \"human\" or \"json\")")]
    UnknownLogFormat(String),
}

impl KernelConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Enforce the parameter invariants and the log-format vocabulary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.supply.validate()?;
        self.kernel.validate()?;
        self.log_format()?;
        Ok(())
    }

    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        match self.log_format.as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }

    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("KernelConfig is always serializable to TOML")
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            supply: SupplyEquilibriumParams::default(),
            kernel: KernelParams::default(),
            fee_policy: FeePolicy::default(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
