// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Only ambient preferences are persisted (default canvas size, background).
//! The collage itself is never written to disk; a session ends when the
//! window closes.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCollage";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub canvas_width: Option<u32>,
    #[serde(default)]
    pub canvas_height: Option<u32>,
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Some(DEFAULT_CANVAS_WIDTH),
            canvas_height: Some(DEFAULT_CANVAS_HEIGHT),
            background: Some(DEFAULT_BACKGROUND.to_string()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring an explicit directory override.
fn config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => get_default_config_path(),
    }
}

pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_canvas_settings() {
        let config = Config {
            canvas_width: Some(1920),
            canvas_height: Some(1080),
            background: Some("#202020".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.canvas_width, config.canvas_width);
        assert_eq!(loaded.canvas_height, config.canvas_height);
        assert_eq!(loaded.background, config.background);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.canvas_width, Some(DEFAULT_CANVAS_WIDTH));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_with_dir_override_reads_that_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            canvas_width: Some(640),
            canvas_height: Some(480),
            background: None,
        };
        save(&config, Some(temp_dir.path())).expect("failed to save config");

        let loaded = load(Some(temp_dir.path())).expect("failed to load config");
        assert_eq!(loaded.canvas_width, Some(640));
        assert_eq!(loaded.canvas_height, Some(480));
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load(Some(temp_dir.path())).expect("load should not error");
        assert_eq!(loaded.canvas_width, Some(DEFAULT_CANVAS_WIDTH));
        assert_eq!(loaded.background, Some(DEFAULT_BACKGROUND.to_string()));
    }
}
