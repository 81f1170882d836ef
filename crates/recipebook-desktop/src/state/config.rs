//! Application settings read at startup
//!
//! The settings file is optional and read-only from the app's point of view:
//! a missing or broken file falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use recipebook_core::ThemePreference;

/// Errors that can occur while locating the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to find config directory")]
    NoConfigDir,
}

/// Status of config load operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadStatus {
    /// Config loaded successfully from disk
    Loaded,
    /// No config file existed, using fresh defaults
    Fresh,
    /// Config file could not be parsed, using defaults
    Corrupted {
        /// Error message describing the corruption
        error: String,
    },
    /// Config file couldn't be read, using defaults
    ReadError {
        /// Error message
        error: String,
    },
}

impl ConfigLoadStatus {
    /// Get a warning message for the log, if applicable
    pub fn warning_message(&self) -> Option<String> {
        match self {
            ConfigLoadStatus::Corrupted { error } => Some(format!(
                "Your configuration file could not be parsed and was ignored: {error}"
            )),
            ConfigLoadStatus::ReadError { error } => Some(format!(
                "Could not read your configuration file and it was ignored: {error}"
            )),
            _ => None,
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Theme preference (system, light, or dark)
    #[serde(default)]
    pub theme: ThemePreference,
    /// Read recipes from this file instead of the bundled one
    #[serde(default)]
    pub recipes_path: Option<PathBuf>,
}

impl AppConfig {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs = directories::ProjectDirs::from("com", "recipebook", "recipebook")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory with status
    /// information.
    pub fn load_with_status() -> (Self, ConfigLoadStatus) {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("Could not determine config path: {}", e);
                (
                    Self::default(),
                    ConfigLoadStatus::ReadError {
                        error: e.to_string(),
                    },
                )
            }
        }
    }

    /// Load configuration from `config_path`, falling back to defaults.
    pub fn load_from(config_path: &Path) -> (Self, ConfigLoadStatus) {
        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            return (Self::default(), ConfigLoadStatus::Fresh);
        }

        match std::fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    (config, ConfigLoadStatus::Loaded)
                }
                Err(e) => {
                    tracing::error!("Failed to parse config: {}", e);
                    (
                        Self::default(),
                        ConfigLoadStatus::Corrupted {
                            error: e.to_string(),
                        },
                    )
                }
            },
            Err(e) => {
                tracing::error!("Failed to read config: {}", e);
                (
                    Self::default(),
                    ConfigLoadStatus::ReadError {
                        error: e.to_string(),
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_fresh() {
        let dir = TempDir::new().unwrap();
        let (config, status) = AppConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(status, ConfigLoadStatus::Fresh);
        assert!(status.warning_message().is_none());
    }

    #[test]
    fn test_load_theme_and_recipes_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme": "dark", "recipes_path": "/srv/recipes.json"}"#).unwrap();

        let (config, status) = AppConfig::load_from(&path);
        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.recipes_path, Some(PathBuf::from("/srv/recipes.json")));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let (config, status) = AppConfig::load_from(&path);
        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(config.theme, ThemePreference::System);
        assert!(config.recipes_path.is_none());
    }

    #[test]
    fn test_corrupted_config_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme": "sepia"}"#).unwrap();

        let (config, status) = AppConfig::load_from(&path);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(status, ConfigLoadStatus::Corrupted { .. }));
        assert!(status.warning_message().is_some());
    }
}
