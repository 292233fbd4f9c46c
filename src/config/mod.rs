// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! notification defaults to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[defaults]` - Display options applied to every notification unless a
//!   request overrides them (same keys as [`Options`], callbacks excluded)
//! - `[diagnostics]` - Lifecycle event buffer settings
//!
//! Unknown enum strings fall back to their documented default instead of
//! failing the whole file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//! use iced_snackbar::ui::notifications::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a default
//! config.defaults.position = Some(Position::TopCenter);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Diagnostics section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Options,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
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
/// the default config with a warning key explaining what went wrong.
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{
        LineClamp, Position, QueueStrategy, ThemePreset, ThemeToken,
    };
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_defaults() {
        let mut config = Config::default();
        config.defaults.position = Some(Position::TopCenter);
        config.defaults.queue_strategy = Some(QueueStrategy::ReplaceOldest);
        config.defaults.duration_ms = Some(2500);
        config.defaults.max_lines = Some(LineClamp::Unclamped);
        config.diagnostics.buffer_capacity = Some(64);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.defaults.position, Some(Position::TopCenter));
        assert_eq!(
            loaded.defaults.queue_strategy,
            Some(QueueStrategy::ReplaceOldest)
        );
        assert_eq!(loaded.defaults.duration_ms, Some(2500));
        assert_eq!(loaded.defaults.max_lines, Some(LineClamp::Unclamped));
        assert_eq!(loaded.diagnostics.buffer_capacity, Some(64));
    }

    #[test]
    fn unknown_enum_strings_fall_back_instead_of_failing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[defaults]\ntheme = \"neon\"\nposition = \"middle\"\nqueue-strategy = \"shuffle\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("unknown values must not fail");
        assert_eq!(loaded.defaults.theme, Some(ThemePreset::Dark));
        assert_eq!(loaded.defaults.position, Some(Position::BottomRight));
        assert_eq!(loaded.defaults.queue_strategy, Some(QueueStrategy::Stack));
    }

    #[test]
    fn custom_theme_reads_hex_colors_and_drops_invalid_entries() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[defaults.custom-theme]\nbackground = \"#102030\"\ntext = \"not-a-color\"\nglow = \"#ffffff\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        let overrides = loaded
            .defaults
            .custom_theme
            .expect("custom theme section should be read");
        assert_eq!(overrides.len(), 1);
        assert!(overrides.get(ThemeToken::Background).is_some());
        assert!(overrides.get(ThemeToken::Text).is_none());
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_warning_for_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert!(config.defaults.position.is_none());
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(config.diagnostics.buffer_capacity.is_none());
    }

    #[test]
    fn save_with_override_creates_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(base.clone()))
            .expect("save should create directories");
        assert!(base.join(CONFIG_FILE).exists());
    }
}
