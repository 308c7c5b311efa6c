// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Fleet API endpoint and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `CAMBOARD_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Secrets
//!
//! The API bearer token is intentionally *not* part of this file. It is
//! resolved at startup from the `--api-token` CLI flag or the
//! `CAMBOARD_API_TOKEN` environment variable, so the secret never sits on
//! disk next to display preferences.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the API bearer token.
pub const ENV_API_TOKEN: &str = "CAMBOARD_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "CAMBOARD_API_URL";

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

/// Fleet API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the fleet API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Effective timeout, clamped into the supported range so a hand-edited
    /// config cannot request a nonsensical value.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Fleet API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
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
// Secret / Override Resolution
// =============================================================================

/// Resolves the API bearer token: CLI flag first, then environment.
///
/// Returns `None` when no token is configured; requests are then sent
/// unauthenticated and the server's rejection surfaces through the normal
/// error path.
#[must_use]
pub fn resolve_api_token(cli_token: Option<String>) -> Option<String> {
    if let Some(token) = cli_token {
        if !token.is_empty() {
            return Some(token);
        }
    }
    match std::env::var(ENV_API_TOKEN) {
        Ok(token) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Resolves the API base URL: CLI flag, then environment, then config file.
///
/// A trailing slash is stripped so endpoint paths can be appended verbatim.
#[must_use]
pub fn resolve_base_url(cli_url: Option<String>, config: &Config) -> String {
    let url = cli_url
        .filter(|url| !url.is_empty())
        .or_else(|| std::env::var(ENV_API_URL).ok().filter(|url| !url.is_empty()))
        .unwrap_or_else(|| config.api.base_url.clone());
    url.trim_end_matches('/').to_string()
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
/// a default config with a notification key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
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

/// Saves configuration to a specific path, creating parent directories.
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

/// Serializes tests that touch process environment variables. Shared across
/// test modules because the environment is process-global.
#[cfg(test)]
pub(crate) fn test_env_lock() -> &'static std::sync::Mutex<()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn env_lock() -> &'static std::sync::Mutex<()> {
        test_env_lock()
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: "https://fleet.example.com".to_string(),
                timeout_secs: Some(10),
            },
        };

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("save should succeed");
        let loaded = load_from_path(&config_path).expect("load should succeed");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let config = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn malformed_file_yields_default_config_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not [valid toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn absent_file_yields_default_config_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"solarized\"\n").expect("write");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn timeout_is_clamped_into_supported_range() {
        let api = ApiConfig {
            base_url: default_base_url(),
            timeout_secs: Some(0),
        };
        assert_eq!(api.timeout_secs(), MIN_REQUEST_TIMEOUT_SECS);

        let api = ApiConfig {
            base_url: default_base_url(),
            timeout_secs: Some(10_000),
        };
        assert_eq!(api.timeout_secs(), MAX_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn cli_token_takes_precedence_over_environment() {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        std::env::set_var(ENV_API_TOKEN, "env-token");

        let token = resolve_api_token(Some("cli-token".to_string()));
        assert_eq!(token.as_deref(), Some("cli-token"));

        let token = resolve_api_token(None);
        assert_eq!(token.as_deref(), Some("env-token"));

        std::env::remove_var(ENV_API_TOKEN);
    }

    #[test]
    fn missing_token_resolves_to_none() {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        std::env::remove_var(ENV_API_TOKEN);

        assert!(resolve_api_token(None).is_none());
        assert!(resolve_api_token(Some(String::new())).is_none());
    }

    #[test]
    fn base_url_resolution_strips_trailing_slash() {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        std::env::remove_var(ENV_API_URL);

        let config = Config::default();
        let url = resolve_base_url(Some("https://fleet.example.com/".to_string()), &config);
        assert_eq!(url, "https://fleet.example.com");

        let url = resolve_base_url(None, &config);
        assert_eq!(url, DEFAULT_API_BASE_URL);
    }
}
