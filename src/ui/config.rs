//! # Configuration Persistence
//!
//! User configuration stored in `~/.config/interview-deck/config.json`.
//!
//! ## Keys
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `theme` | `"Catppuccin Mocha"` | name of a built-in [`Theme`](crate::ui::theme::Theme) |
//! | `enrichment_base` | none | directory or `http(s)` URL record resources are fetched from |
//!
//! The `directories` crate resolves the platform-appropriate config
//! directory. Command-line flags take precedence over this file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::EnrichSource;
use crate::ui::theme::Theme;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichment_base: Option<String>,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            enrichment_base: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {e:#}");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.enrichment_source().with_context(|| {
            format!("Invalid enrichment_base in config file: {}", path.display())
        })?;
        Ok(config)
    }

    /// The configured enrichment source, if any.
    pub fn enrichment_source(&self) -> Result<Option<EnrichSource>> {
        self.enrichment_base
            .as_deref()
            .map(EnrichSource::parse)
            .transpose()
    }

    /// The configured theme, or the default when the name is not a built-in.
    pub fn theme(&self) -> &'static Theme {
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using the default", self.theme);
            Theme::default_theme()
        })
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "interview-deck")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
