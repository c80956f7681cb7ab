//! Configuration management for medisuggester
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/medisuggester/config.toml

use crate::i18n::Locale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub appearance: Appearance,
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("medisuggester");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`, or create a default one if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!(path = %path.display(), "created default config");
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        tracing::debug!(locale = %config.locale, appearance = config.appearance.as_str(), "loaded config");
        Ok(config)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Light/dark preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Follow the terminal's background colour
    #[default]
    System,
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::System => "system",
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    /// Resolve to a dark-mode flag; `system_dark` is consulted only for `System`
    pub fn is_dark(&self, system_dark: impl FnOnce() -> bool) -> bool {
        match self {
            Appearance::System => system_dark(),
            Appearance::Light => false,
            Appearance::Dark => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.appearance, Appearance::System);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("locale = \"hi\"\n").unwrap();
        assert_eq!(config.locale, Locale::Hi);
        assert_eq!(config.appearance, Appearance::System);
    }

    #[test]
    fn test_invalid_locale_rejected() {
        assert!(toml::from_str::<Config>("locale = \"de\"\n").is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config { locale: Locale::Hi, appearance: Appearance::Dark };
        config.save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("locale = \"hi\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_appearance_resolution() {
        assert!(Appearance::Dark.is_dark(|| false));
        assert!(!Appearance::Light.is_dark(|| true));
        assert!(Appearance::System.is_dark(|| true));
        assert!(!Appearance::System.is_dark(|| false));
    }
}
