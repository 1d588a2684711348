//! Engine configuration
//!
//! The severity sub-rules compare selection counts against empirical
//! thresholds. The values carry no stated clinical justification, so they are
//! held here as configuration rather than hard-coded literals; do not change
//! the defaults without domain guidance.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_aga_images_over() -> usize {
    2
}

fn default_aga_tags_over() -> usize {
    1
}

fn default_temp_tags_over() -> usize {
    1
}

fn default_temp_images_over() -> usize {
    1
}

/// Severity sub-rule thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// Pattern-loss image count above which AGA severity is Moderate to Severe
    #[serde(default = "default_aga_images_over")]
    pub aga_images_moderate_to_severe_over: usize,

    /// AGA-indicator tag count above which AGA severity is Moderate to Severe
    #[serde(default = "default_aga_tags_over")]
    pub aga_tags_moderate_to_severe_over: usize,

    /// Temporary-cause tag count above which temporary severity is Moderate
    #[serde(default = "default_temp_tags_over")]
    pub temp_tags_moderate_over: usize,

    /// Matching image count above which temporary severity is Moderate
    #[serde(default = "default_temp_images_over")]
    pub temp_images_moderate_over: usize,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            aga_images_moderate_to_severe_over: default_aga_images_over(),
            aga_tags_moderate_to_severe_over: default_aga_tags_over(),
            temp_tags_moderate_over: default_temp_tags_over(),
            temp_images_moderate_over: default_temp_images_over(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub thresholds: SeverityThresholds,
}

impl EngineConfig {
    /// Load configuration from the default path, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(EngineConfig::default());
        }

        Self::from_file(&config_path)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context("Failed to read config file")?;

        let config: EngineConfig = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".trichoguide").join("config.toml"))
    }
}
