// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[banner]` - Default display duration and slide animation length
//! - `[metrics]` - Overridable banner offsets (text offset, touch strip, margin)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `ICED_SHOUT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_shout::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::shout::Metrics;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedShout";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHOUT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Banner timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Display duration used by announcements that do not set their own (seconds).
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f64>,

    /// Slide in/out animation length (milliseconds). Zero disables motion.
    #[serde(
        default = "default_animation_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_millis: Option<u64>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
            animation_millis: default_animation_millis(),
        }
    }
}

impl BannerConfig {
    /// Returns the default display duration, clamped to the supported range.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        let secs = self
            .default_duration_secs
            .filter(|secs| secs.is_finite())
            .unwrap_or(DEFAULT_DURATION_SECS)
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        Duration::from_secs_f64(secs)
    }

    /// Returns the slide animation length, clamped to the supported range.
    #[must_use]
    pub fn animation(&self) -> Duration {
        let millis = self
            .animation_millis
            .unwrap_or(DEFAULT_ANIMATION_MILLIS)
            .min(MAX_ANIMATION_MILLIS);
        Duration::from_millis(millis)
    }
}

/// Overridable banner metrics.
///
/// Only the offsets that hosts commonly tune are exposed; indicator and image
/// sizes stay fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetricsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_offset: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch_offset: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
}

impl MetricsConfig {
    /// Applies the configured overrides on top of the default metrics.
    ///
    /// Negative or non-finite values fall back to the default; large values are
    /// clamped to [`MAX_METRIC`].
    #[must_use]
    pub fn to_metrics(&self) -> Metrics {
        let sanitize = |value: Option<f32>, fallback: f32| {
            value
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map_or(fallback, |v| v.min(MAX_METRIC))
        };

        Metrics {
            text_offset: sanitize(self.text_offset, DEFAULT_TEXT_OFFSET),
            touch_offset: sanitize(self.touch_offset, DEFAULT_TOUCH_OFFSET)
                .max(INDICATOR_HEIGHT),
            margin: sanitize(self.margin, DEFAULT_MARGIN),
            ..Metrics::default()
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_secs() -> Option<f64> {
    Some(DEFAULT_DURATION_SECS)
}

fn default_animation_millis() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MILLIS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring (in order) the explicit override,
/// the `ICED_SHOUT_CONFIG_DIR` environment variable and the platform default.
#[must_use]
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
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
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
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

// =============================================================================
// Tests
// =============================================================================
