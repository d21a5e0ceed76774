//! Configuration schema for Minicart
//!
//! Configuration is stored at `~/.config/minicart/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cart snapshot storage settings
    pub store: StoreConfig,

    /// Display settings
    pub display: DisplayConfig,
}

/// Cart snapshot storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Snapshot file path (defaults to the state directory)
    pub path: Option<PathBuf>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Currency symbol prefixed to prices
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[store]"));
        assert!(toml.contains("[display]"));
    }

    #[test]
    fn config_deserializes_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.currency, "$");
        assert!(config.store.path.is_none());
    }

    #[test]
    fn config_deserializes_partial() {
        let toml = r#"
            [display]
            currency = "EUR "
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.display.currency, "EUR ");
        assert!(config.store.path.is_none()); // default preserved
    }
}
