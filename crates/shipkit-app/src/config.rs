//! Configuration management for shipkit
//!
//! Config stored at: ~/.config/shipkit/config.json
//! (override with the SHIPKIT_CONFIG environment variable)

use serde::{Deserialize, Serialize};
use shipkit_domain::PackingLimits;
use shipkit_types::{ConfigError, OutputFormat, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::rates::RateTableConfig;

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "SHIPKIT_CONFIG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default per-box limits applied to every shipment
    #[serde(default)]
    pub limits: PackingLimits,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Weight brackets used by `quote`
    #[serde(default)]
    pub rate_table: RateTableConfig,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: PackingLimits::default(),
            output_format: default_output_format(),
            rate_table: RateTableConfig::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("shipkit");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config
            .limits
            .validate()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Shipkit Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Max weight:          {}", self.limits.max_weight)?;
        writeln!(
            f,
            "Max quantity:        {}",
            self.limits
                .max_quantity
                .map(|q| q.to_string())
                .unwrap_or_else(|| "(unlimited)".to_string())
        )?;
        writeln!(f, "Variation threshold: {}", self.limits.variation_threshold)?;
        writeln!(f, "Weight threshold:    {}", self.limits.weight_threshold)?;
        writeln!(f, "Quantity threshold:  {}", self.limits.quantity_threshold)?;
        writeln!(f, "Output format:       {}", self.output_format)?;
        writeln!(f)?;
        writeln!(f, "Rate table ({}):", self.rate_table.currency)?;
        if self.rate_table.brackets.is_empty() {
            writeln!(f, "  (no brackets)")?;
        }
        for bracket in &self.rate_table.brackets {
            writeln!(f, "  up to {:>8.2}  {:>10.2}", bracket.max_weight, bracket.price)?;
        }

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:         {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateBracket;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.limits = PackingLimits::default().with_max_weight(70.0).with_max_quantity(24);
        config.output_format = OutputFormat::Json;
        config.rate_table.brackets.push(RateBracket {
            max_weight: 10.0,
            price: dec!(8.50),
        });
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"limits": {"max_weight": 50}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.limits.max_weight, 50.0);
        assert_eq!(config.limits.weight_threshold, 0.5);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.rate_table.currency, "USD");
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"limits": {"weight_threshold": 3}}"#).unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_display_lists_brackets() {
        let mut config = Config::default();
        config.rate_table.brackets.push(RateBracket {
            max_weight: 10.0,
            price: dec!(8.5),
        });
        let text = config.to_string();
        assert!(text.contains("Max weight:          150"));
        assert!(text.contains("8.50"));
    }
}
