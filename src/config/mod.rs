// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! toast defaults to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Logging filter
//! - `[toast]` - Default swipe behavior for toasts that don't override it
//! - `[toast.spring]` - Entrance spring parameters
//! - `[window]` - Initial window size of the demo application
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SWIPE_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use swipe_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.swipe_threshold = Some(80.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::animation::Spring;
use crate::domain::toast::{AnimateOutDuration, Direction, SwipeThreshold};
use crate::error::{Error, Result};
use crate::ui::toast::Settings;
use iced::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset (e.g. "debug").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Entrance spring parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpringConfig {
    #[serde(default = "default_damping", skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,

    #[serde(default = "default_stiffness", skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            stiffness: default_stiffness(),
        }
    }
}

/// Default toast behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Release distance (logical pixels) that dismisses a toast.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Exit animation duration in milliseconds.
    #[serde(
        default = "default_animate_out_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animate_out_ms: Option<u64>,

    /// Snap-back duration in milliseconds.
    #[serde(default = "default_settle_ms", skip_serializing_if = "Option::is_none")]
    pub settle_ms: Option<u64>,

    /// Side toasts slide in from.
    #[serde(
        default,
        deserialize_with = "deserialize_direction",
        serialize_with = "serialize_direction"
    )]
    pub initial_direction: Direction,

    #[serde(default)]
    pub spring: SpringConfig,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            animate_out_ms: default_animate_out_ms(),
            settle_ms: default_settle_ms(),
            initial_direction: Direction::default(),
            spring: SpringConfig::default(),
        }
    }
}

impl ToastConfig {
    /// Converts the section into toast settings, replacing missing or
    /// out-of-range values with defaults.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let settle_ms = self
            .settle_ms
            .unwrap_or(DEFAULT_SETTLE_MS)
            .min(MAX_SETTLE_MS);
        let damping = self
            .spring
            .damping
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(DEFAULT_SPRING_DAMPING);
        let stiffness = self
            .spring
            .stiffness
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_SPRING_STIFFNESS);

        Settings {
            initial_direction: self.initial_direction,
            swipe_threshold: SwipeThreshold::new(
                self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD),
            ),
            animate_out: AnimateOutDuration::from_millis(
                self.animate_out_ms.unwrap_or(DEFAULT_ANIMATE_OUT_MS),
            ),
            settle: Duration::from_millis(settle_ms),
            spring: Spring::new(damping, stiffness),
            ..Settings::default()
        }
    }
}

/// Demo window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl WindowConfig {
    /// Window size, falling back to defaults for missing or non-positive values.
    #[must_use]
    pub fn size(&self) -> Size {
        let valid = |v: &f32| v.is_finite() && *v > 0.0;
        Size::new(
            self.width.filter(valid).unwrap_or(DEFAULT_WINDOW_WIDTH),
            self.height.filter(valid).unwrap_or(DEFAULT_WINDOW_HEIGHT),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_animate_out_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATE_OUT_MS)
}

fn default_settle_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_MS)
}

fn default_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

fn default_stiffness() -> Option<f32> {
    Some(DEFAULT_SPRING_STIFFNESS)
}

fn deserialize_direction<'de, D>(deserializer: D) -> std::result::Result<Direction, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<Direction>()
        .map_err(|err| D::Error::custom(format!("invalid initial_direction: {}", err)))
}

fn serialize_direction<S>(direction: &Direction, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(direction.as_str())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// the default config and [`LOAD_ERROR_WARNING`].
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
                    tracing::warn!(path = %path.display(), %err, "failed to load config, using defaults");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
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
