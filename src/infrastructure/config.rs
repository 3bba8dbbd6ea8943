// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_EXPORT_FILENAME, DEFAULT_KATEX_BASE};

/// TOML configuration for texcards
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub katex: KatexConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DeckConfig {
    /// Path to the working deck file; empty means the platform data directory.
    #[serde(default = "default_deck_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_export_filename")]
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct KatexConfig {
    #[serde(default = "default_katex_base")]
    pub base_url: String,
}

// Default value functions
fn default_deck_path() -> String { String::new() }
fn default_export_filename() -> String { DEFAULT_EXPORT_FILENAME.to_string() }
fn default_katex_base() -> String { DEFAULT_KATEX_BASE.to_string() }

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            path: default_deck_path(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
        }
    }
}

impl Default for KatexConfig {
    fn default() -> Self {
        Self {
            base_url: default_katex_base(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }
}
