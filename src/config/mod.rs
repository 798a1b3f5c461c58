// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast lifetime, exit transition, optional stack cap
//! - `[timing]` - Simulated latencies for search, submissions and redirects
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PATHSTARTER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pathstarter::config;
//!
//! let dir = std::path::PathBuf::from("/tmp/pathstarter");
//! let (mut config, _warning) = config::load_with_override(Some(dir.clone()));
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, &dir.join("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

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

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Time a toast stays displayed before it starts leaving.
    #[serde(
        default = "default_notification_lifetime_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub lifetime_ms: Option<u64>,

    /// Duration of the exit transition.
    #[serde(
        default = "default_notification_exit_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_ms: Option<u64>,

    /// Maximum number of toasts displayed at once. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: default_notification_lifetime_ms(),
            exit_ms: default_notification_exit_ms(),
            max_visible: None,
        }
    }
}

/// Simulated latencies of the offline flows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(
        default = "default_search_latency_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_latency_ms: Option<u64>,

    #[serde(
        default = "default_submit_latency_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_latency_ms: Option<u64>,

    #[serde(default = "default_redirect_ms", skip_serializing_if = "Option::is_none")]
    pub redirect_ms: Option<u64>,

    #[serde(
        default = "default_logout_redirect_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub logout_redirect_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            search_latency_ms: default_search_latency_ms(),
            submit_latency_ms: default_submit_latency_ms(),
            redirect_ms: default_redirect_ms(),
            logout_redirect_ms: default_logout_redirect_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

/// Resolved delays used by the application's deferred actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latencies {
    pub search: Duration,
    pub submit: Duration,
    pub redirect: Duration,
    pub logout_redirect: Duration,
}

impl Default for Latencies {
    fn default() -> Self {
        TimingConfig::default().latencies()
    }
}

impl TimingConfig {
    /// Resolves the configured delays, clamping each to the accepted range.
    #[must_use]
    pub fn latencies(&self) -> Latencies {
        let resolve = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(MAX_SIMULATED_DELAY_MS))
        };
        Latencies {
            search: resolve(self.search_latency_ms, DEFAULT_SEARCH_LATENCY_MS),
            submit: resolve(self.submit_latency_ms, DEFAULT_SUBMIT_LATENCY_MS),
            redirect: resolve(self.redirect_ms, DEFAULT_REDIRECT_MS),
            logout_redirect: resolve(self.logout_redirect_ms, DEFAULT_LOGOUT_REDIRECT_MS),
        }
    }
}

impl NotificationsConfig {
    /// Returns the display lifetime of a toast.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(
            self.lifetime_ms
                .unwrap_or(DEFAULT_NOTIFICATION_LIFETIME_MS)
                .min(MAX_SIMULATED_DELAY_MS),
        )
    }

    /// Returns the exit transition duration.
    #[must_use]
    pub fn exit(&self) -> Duration {
        Duration::from_millis(
            self.exit_ms
                .unwrap_or(DEFAULT_NOTIFICATION_EXIT_MS)
                .min(MAX_SIMULATED_DELAY_MS),
        )
    }

    /// Returns the stack cap, ignoring zero and clamping to the accepted bound.
    #[must_use]
    pub fn cap(&self) -> Option<usize> {
        self.max_visible
            .filter(|cap| *cap > 0)
            .map(|cap| cap.min(MAX_NOTIFICATION_CAP))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_notification_lifetime_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_LIFETIME_MS)
}

fn default_notification_exit_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_EXIT_MS)
}

fn default_search_latency_ms() -> Option<u64> {
    Some(DEFAULT_SEARCH_LATENCY_MS)
}

fn default_submit_latency_ms() -> Option<u64> {
    Some(DEFAULT_SUBMIT_LATENCY_MS)
}

fn default_redirect_ms() -> Option<u64> {
    Some(DEFAULT_REDIRECT_MS)
}

fn default_logout_redirect_ms() -> Option<u64> {
    Some(DEFAULT_LOGOUT_REDIRECT_MS)
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
// Load / Save
// =============================================================================

/// Loads the configuration from a custom directory, or the default one when
/// `base_dir` is `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "failed to load settings");
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
