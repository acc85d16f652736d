// SPDX-License-Identifier: MPL-2.0
//! Read-only user preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[feed]` - Dataset URL, HTTP user agent and thumbnail cache size
//!
//! The gallery never writes this file; it is edited by hand. Missing keys
//! take their defaults, and a file that cannot be parsed is replaced by the
//! defaults with a warning.
//!
//! # Examples
//!
//! ```no_run
//! use apod_gallery::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("falling back to defaults: {key}");
//! }
//! println!("feed: {}", config.feed.url());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` is unreadable.
pub const LOAD_WARNING_KEY: &str = "warning-config-load";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Feed access settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Dataset URL; [`DEFAULT_FEED_URL`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// HTTP user agent; [`DEFAULT_USER_AGENT`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Thumbnails kept in memory, clamped to the accepted bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_cache_entries: Option<usize>,
}

impl FeedConfig {
    #[must_use]
    pub fn url(&self) -> &str {
        non_empty(self.url.as_deref()).unwrap_or(DEFAULT_FEED_URL)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        non_empty(self.user_agent.as_deref()).unwrap_or(DEFAULT_USER_AGENT)
    }

    #[must_use]
    pub fn thumbnail_cache_entries(&self) -> usize {
        self.thumbnail_cache_entries
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_ENTRIES)
            .clamp(MIN_THUMBNAIL_CACHE_ENTRIES, MAX_THUMBNAIL_CACHE_ENTRIES)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub feed: FeedConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the resolved config directory.
///
/// Returns `(config, warning)`. A missing file is not an error; an
/// unreadable one yields the defaults and [`LOAD_WARNING_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir` (or the resolved directory).
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => {
            log::info!("Loaded configuration from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("Ignoring {}: {err}", path.display());
            (Config::default(), Some(LOAD_WARNING_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
