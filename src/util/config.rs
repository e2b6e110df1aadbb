//! Settings file support for Basemap.
//!
//! Basemap supports two settings file locations:
//! - Global: `~/.basemap/config.toml` - User-wide defaults
//! - Project: `.basemap/config.toml` - Project-specific overrides
//!
//! Project settings take precedence over global settings. These are
//! tool-level preferences; workspace identity lives in `Basemap.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Basemap settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Listing settings
    pub listing: ListingConfig,
}

/// Output-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format for `basemap convert` when neither the command line
    /// nor the manifest specifies one (shapefile or geojson).
    pub default_format: Option<String>,
}

/// Listing-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Show paths relative to the workspace root in `basemap ls`.
    #[serde(default = "default_true")]
    pub relative_paths: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            relative_paths: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load settings with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save settings to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.output.default_format.is_some() {
            self.output.default_format = other.output.default_format;
        }
        if !other.listing.relative_paths {
            self.listing.relative_paths = false;
        }
    }
}

/// Load merged settings from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.basemap/config.toml)
/// 2. Global config (~/.basemap/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    // Project config overrides global
    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global basemap config directory (~/.basemap).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".basemap"))
}

/// Get the global config path (~/.basemap/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.basemap/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".basemap").join("config.toml")
}
