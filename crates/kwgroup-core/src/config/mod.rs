//! Configuration: grouping options plus ambient settings, loadable from TOML.

pub mod defaults;
pub mod grouping_config;
pub mod observability_config;

use serde::{Deserialize, Serialize};

pub use grouping_config::{GroupingOptions, OptionCorrection};
pub use observability_config::ObservabilityConfig;

use crate::errors::ConfigError;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KwGroupConfig {
    pub grouping: GroupingOptions,
    pub observability: ObservabilityConfig,
}

impl KwGroupConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize {
            reason: e.to_string(),
        })
    }
}
