// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and start screen
//! - `[gallery]` - Image source, rendition sizes, grid, gestures and cache
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Screen shown when the application starts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StartScreen {
    #[default]
    Gallery,
    Calculator,
}

impl std::str::FromStr for StartScreen {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gallery" => Ok(Self::Gallery),
            "calculator" => Ok(Self::Calculator),
            other => Err(format!("unknown screen '{other}' (expected gallery or calculator)")),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Screen shown at startup.
    #[serde(default)]
    pub start_screen: StartScreen,
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Base URL of the image service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,

    /// Thumbnail rendition width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,

    /// Thumbnail rendition height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,

    /// Lightbox rendition width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_width: Option<u32>,

    /// Lightbox rendition height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_height: Option<u32>,

    /// Target grid tile width in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_width: Option<f32>,

    /// Minimum swipe distance in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,

    /// Optional TOML catalog replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Number of fetched images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_base_url: Some(DEFAULT_IMAGE_BASE_URL.to_string()),
            thumbnail_width: Some(DEFAULT_THUMBNAIL_WIDTH),
            thumbnail_height: Some(DEFAULT_THUMBNAIL_HEIGHT),
            viewer_width: Some(DEFAULT_VIEWER_WIDTH),
            viewer_height: Some(DEFAULT_VIEWER_HEIGHT),
            tile_width: Some(DEFAULT_TILE_WIDTH),
            swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
            catalog_path: None,
            cache_capacity: Some(DEFAULT_CACHE_CAPACITY),
        }
    }
}

impl GalleryConfig {
    /// Tile width clamped to the supported range. `nan` and `inf` count as unset.
    #[must_use]
    pub fn tile_width(&self) -> f32 {
        self.tile_width
            .filter(|width| width.is_finite())
            .unwrap_or(DEFAULT_TILE_WIDTH)
            .clamp(MIN_TILE_WIDTH, MAX_TILE_WIDTH)
    }

    /// Swipe threshold clamped to the supported range. `nan` and `inf` count
    /// as unset.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
            .filter(|threshold| threshold.is_finite())
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
            .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
    }

    /// Cache capacity clamped to the supported range.
    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
            .unwrap_or(DEFAULT_CACHE_CAPACITY)
            .clamp(MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

/// Returns where `save()` would write, for user-facing messages.
pub fn config_file_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
}

// =============================================================================
// Tests
// =============================================================================
