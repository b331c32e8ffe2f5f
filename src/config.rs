//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::BandMode;

/// Display preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default band count (4 or 5) used by `decode` when `--bands` is omitted.
    #[serde(default = "default_bands")]
    pub default_bands: u8,
}

/// Default band count (the classic 4-band layout)
fn default_bands() -> u8 {
    4
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_bands: default_bands(),
        }
    }
}

impl DisplayConfig {
    /// Default band layout as a typed mode.
    pub fn default_mode(&self) -> Result<BandMode> {
        BandMode::from_band_count(usize::from(self.default_bands))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/OhmCode/config.toml`
/// - macOS: `~/Library/Application Support/OhmCode/config.toml`
/// - Windows: `%APPDATA%\OhmCode\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("OhmCode");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.display.default_bands, 4 | 5) {
            anyhow::bail!(
                "Invalid default_bands {}; expected 4 or 5",
                self.display.default_bands
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.display.default_bands, 4);
        assert_eq!(config.display.default_mode().unwrap(), BandMode::Four);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_band_count() {
        let config = Config {
            display: DisplayConfig { default_bands: 6 },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            display: DisplayConfig { default_bands: 5 },
        };
        let toml_text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.display.default_bands, 4);
    }

    #[test]
    fn test_config_file_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            display: DisplayConfig { default_bands: 5 },
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let parsed: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
