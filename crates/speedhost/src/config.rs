//! Configuration management for the speedhost demo server.
//!
//! This module handles loading, validation, and conversion of the server
//! configuration from TOML files and command-line arguments.

use serde::{Deserialize, Serialize};
use speed_protocol::StockDefaults;
use std::path::PathBuf;
use tracing::info;

fn default_store_path() -> String {
    "world.json".to_string()
}

fn default_ship_speed() -> f64 {
    100.0
}

fn default_missile_min_speed() -> f64 {
    100.0
}

fn default_missile_max_speed() -> f64 {
    200.0
}

fn default_autopilot_speed() -> f64 {
    100.0
}

fn default_container_drop_deploy_height() -> f64 {
    200.0
}

fn default_respawn_ship_deploy_height() -> f64 {
    300.0
}

fn default_operator_id() -> u64 {
    1
}

fn default_operator_name() -> String {
    "Operator".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Application configuration loaded from a TOML file.
///
/// Encompasses the world's stock limits, the hosting operator's identity,
/// and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// World configuration settings
    #[serde(default)]
    pub world: WorldSettings,
    /// Hosting operator identity settings
    #[serde(default)]
    pub operator: OperatorSettings,
    /// Logging configuration settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// World-specific configuration settings.
///
/// The stock limits are what the simulation would use with no
/// configuration applied; they seed the configuration record and are the
/// targets of `resetall`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSettings {
    /// File path of the persisted variable store
    #[serde(default = "default_store_path")]
    pub store_path: String,
    /// Stock large-grid ship speed cap in m/s
    #[serde(default = "default_ship_speed")]
    pub large_ship_max_speed: f64,
    /// Stock small-grid ship speed cap in m/s
    #[serde(default = "default_ship_speed")]
    pub small_ship_max_speed: f64,
    /// Stock missile launch speed in m/s
    #[serde(default = "default_missile_min_speed")]
    pub missile_min_speed: f64,
    /// Stock missile terminal speed in m/s
    #[serde(default = "default_missile_max_speed")]
    pub missile_max_speed: f64,
    /// Stock autopilot speed limit in m/s
    #[serde(default = "default_autopilot_speed")]
    pub remote_control_max_speed: f64,
    /// Stock cargo drop parachute deploy height in m
    #[serde(default = "default_container_drop_deploy_height")]
    pub container_drop_deploy_height: f64,
    /// Stock respawn ship parachute deploy height in m
    #[serde(default = "default_respawn_ship_deploy_height")]
    pub respawn_ship_deploy_height: f64,
}

/// Identity of the hosting operator driving the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorSettings {
    /// Numeric player identity of the operator
    #[serde(default = "default_operator_id")]
    pub id: u64,
    /// Display name shown in logs and replies
    #[serde(default = "default_operator_name")]
    pub name: String,
    /// Locale tag of the operator's UI
    #[serde(default = "default_language")]
    pub language: String,
}

/// Logging system configuration.
///
/// Controls log output format and levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Whether to output logs in JSON format
    pub json_format: bool,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            large_ship_max_speed: default_ship_speed(),
            small_ship_max_speed: default_ship_speed(),
            missile_min_speed: default_missile_min_speed(),
            missile_max_speed: default_missile_max_speed(),
            remote_control_max_speed: default_autopilot_speed(),
            container_drop_deploy_height: default_container_drop_deploy_height(),
            respawn_ship_deploy_height: default_respawn_ship_deploy_height(),
        }
    }
}

impl Default for OperatorSettings {
    fn default() -> Self {
        Self {
            id: default_operator_id(),
            name: default_operator_name(),
            language: default_language(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldSettings::default(),
            operator: OperatorSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// If the file doesn't exist, creates a default configuration file at
    /// the specified path and returns the default configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The loaded or default configuration, or an error if loading or
    /// creation failed.
    pub async fn load_from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        if path.exists() {
            let content = tokio::fs::read_to_string(path).await?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let default_config = AppConfig::default();
            let toml_content = toml::to_string_pretty(&default_config)?;
            tokio::fs::write(path, toml_content).await?;
            info!("Created default configuration file: {}", path.display());
            Ok(default_config)
        }
    }

    /// Converts the world settings into the stock defaults that seed the
    /// configuration record.
    pub fn to_stock_defaults(&self) -> StockDefaults {
        StockDefaults {
            large_ship_max_speed: self.world.large_ship_max_speed,
            small_ship_max_speed: self.world.small_ship_max_speed,
            missile_min_speed: self.world.missile_min_speed,
            missile_max_speed: self.world.missile_max_speed,
            remote_control_max_speed: self.world.remote_control_max_speed,
            container_drop_deploy_height: self.world.container_drop_deploy_height,
            respawn_ship_deploy_height: self.world.respawn_ship_deploy_height,
        }
    }

    /// Validates the configuration for consistency and correctness.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, or an error string
    /// describing the issue.
    pub fn validate(&self) -> Result<(), String> {
        if self.world.store_path.is_empty() {
            return Err("World store path cannot be empty".to_string());
        }

        if self.world.large_ship_max_speed <= 0.0 || self.world.small_ship_max_speed <= 0.0 {
            return Err("Stock ship speeds must be greater than 0".to_string());
        }

        if self.world.missile_min_speed > self.world.missile_max_speed {
            return Err(
                "Stock missile_min_speed must not exceed missile_max_speed".to_string()
            );
        }

        if self.operator.name.is_empty() {
            return Err("Operator name cannot be empty".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Must be one of: {valid_levels:?}",
                &self.logging.level
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use tokio::fs;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.world.store_path, "world.json");
        assert_eq!(config.world.large_ship_max_speed, 100.0);
        assert_eq!(config.world.small_ship_max_speed, 100.0);
        assert_eq!(config.world.missile_min_speed, 100.0);
        assert_eq!(config.world.missile_max_speed, 200.0);

        assert_eq!(config.operator.id, 1);
        assert_eq!(config.operator.name, "Operator");
        assert_eq!(config.operator.language, "en");

        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_format);

        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_from_existing_file() {
        let toml_content = r#"
[world]
store_path = "custom_world.json"
large_ship_max_speed = 250.0

[operator]
name = "midspace"

[logging]
level = "debug"
json_format = true
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), toml_content).await.unwrap();

        let config = AppConfig::load_from_file(&temp_file.path().to_path_buf())
            .await
            .unwrap();

        assert_eq!(config.world.store_path, "custom_world.json");
        assert_eq!(config.world.large_ship_max_speed, 250.0);
        // Missing fields fall back to serde defaults
        assert_eq!(config.world.small_ship_max_speed, 100.0);
        assert_eq!(config.operator.name, "midspace");
        assert_eq!(config.operator.id, 1);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
    }

    #[tokio::test]
    async fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speedhost.toml");

        let config = AppConfig::load_from_file(&path).await.unwrap();
        assert_eq!(config.world.store_path, "world.json");
        assert!(path.exists());
    }

    #[test]
    fn test_to_stock_defaults() {
        let mut config = AppConfig::default();
        config.world.large_ship_max_speed = 300.0;
        config.world.respawn_ship_deploy_height = 500.0;

        let defaults = config.to_stock_defaults();
        assert_eq!(defaults.large_ship_max_speed, 300.0);
        assert_eq!(defaults.small_ship_max_speed, 100.0);
        assert_eq!(defaults.respawn_ship_deploy_height, 500.0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.world.store_path = String::new();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.world.large_ship_max_speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.world.missile_min_speed = 500.0;
        config.world.missile_max_speed = 100.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());
    }
}
