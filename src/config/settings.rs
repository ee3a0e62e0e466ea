//! Configuration settings for repflow.
//!
//! Settings are loaded from `~/.repflow/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::RepflowError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Workout session settings.
    pub session: SessionConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Workout session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rest period between steps, in seconds.
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
    /// How long the completion banner is shown before the player closes,
    /// in seconds.
    #[serde(default = "default_completion_display_seconds")]
    pub completion_display_seconds: u32,
    /// Ring the terminal bell when a countdown elapses.
    #[serde(default = "default_true")]
    pub cue_sound: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_rest_seconds() -> u32 {
    crate::session::DEFAULT_REST_SECONDS
}

const fn default_completion_display_seconds() -> u32 {
    3
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rest_seconds: default_rest_seconds(),
            completion_display_seconds: default_completion_display_seconds(),
            cue_sound: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, RepflowError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, RepflowError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RepflowError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            RepflowError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), RepflowError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| RepflowError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            RepflowError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.session.rest_seconds, 120);
        assert_eq!(config.session.completion_display_seconds, 3);
        assert!(config.session.cue_sound);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.session.rest_seconds, 120);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.session.rest_seconds = 90;
        config.session.cue_sound = false;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.session.rest_seconds, 90);
        assert!(!loaded.session.cue_sound);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
session:
  rest_seconds: 60
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.session.rest_seconds, 60);
        // Defaults should be used for missing fields
        assert_eq!(config.session.completion_display_seconds, 3);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }
}
