//! Application configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use world_pulse_types::Region;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Ticker settings
    #[serde(default)]
    pub tick: TickConfig,
    /// External insight service settings
    #[serde(default)]
    pub insight: InsightConfig,
    /// Startup filter selections
    #[serde(default)]
    pub defaults: FilterDefaults,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "world_pulse", "world-pulse")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            tick: TickConfig::default(),
            insight: InsightConfig::default(),
            defaults: FilterDefaults::default(),
        }
    }
}

fn default_interval_ms() -> u64 {
    3000
}

/// Ticker cadence configuration
///
/// Any cadence is acceptable; published values are a function of elapsed
/// wall-clock time, so sampling more or less often never changes the
/// sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

/// External insight service configuration
///
/// The API key itself is never stored in the config file; only the name of
/// the environment variable holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Startup filter selections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterDefaults {
    #[serde(default)]
    pub region: Region,
    /// None means the current calendar year
    #[serde(default)]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"interval_ms\": 3000"));
        assert!(json.contains("generativelanguage"));

        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.version, 1);
        assert_eq!(deserialized.insight.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{ "version": 1, "tick": { "interval_ms": 500 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tick.interval_ms, 500);
        assert_eq!(config.insight.model, "gemini-2.5-flash");
        assert!(config.defaults.region.is_world());
        assert!(config.defaults.year.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("world-pulse-config-test");
        let path = dir.join("config.json");
        let mut config = AppConfig::default();
        config.tick.interval_ms = 1234;
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.tick.interval_ms, 1234);

        std::fs::remove_dir_all(&dir).ok();
    }
}
