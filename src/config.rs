//! Editor settings persisted between sessions
//!
//! Stored as pretty JSON under the platform config directory. Missing keys
//! fall back to their defaults so older settings files keep loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Window size limits applied after loading
const MIN_WINDOW_WIDTH: f32 = 600.0;
const MIN_WINDOW_HEIGHT: f32 = 500.0;
const MAX_WINDOW_DIMENSION: f32 = 8192.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Directory used to prefill save/load paths
    #[serde(default = "default_card_dir")]
    pub card_dir: PathBuf,

    /// Directory export folders are created in
    #[serde(default = "default_export_root")]
    pub export_root: PathBuf,

    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_card_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_window_width() -> f32 {
    900.0
}

fn default_window_height() -> f32 {
    700.0
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            card_dir: default_card_dir(),
            export_root: default_export_root(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl EditorSettings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load settings from the default location, writing defaults on first run
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from `path`; never fails, a bad file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "Settings file not found, creating defaults");
            let settings = Self::default();
            if let Err(e) = settings.save_to(path) {
                warn!(error = ?e, "Failed to write default settings");
            }
            return settings;
        }

        let parsed = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))
            .and_then(|contents| {
                serde_json::from_str::<EditorSettings>(&contents)
                    .with_context(|| format!("Failed to parse settings from {:?}", path))
            });

        match parsed {
            Ok(mut settings) => {
                settings.validate_and_clamp();
                info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(error = ?e, "Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings to {:?}", path))?;

        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Remember the directory of a card file the user just saved or loaded
    pub fn remember_card_path(&mut self, card_path: &Path) {
        if let Some(parent) = card_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.card_dir = parent.to_path_buf();
        }
    }

    fn validate_and_clamp(&mut self) {
        if !self.window_width.is_finite() || self.window_width < MIN_WINDOW_WIDTH {
            warn!(window_width = self.window_width, min = MIN_WINDOW_WIDTH, "window_width below minimum, clamping");
            self.window_width = MIN_WINDOW_WIDTH;
        } else if self.window_width > MAX_WINDOW_DIMENSION {
            warn!(window_width = self.window_width, max = MAX_WINDOW_DIMENSION, "window_width exceeds maximum, clamping");
            self.window_width = MAX_WINDOW_DIMENSION;
        }

        if !self.window_height.is_finite() || self.window_height < MIN_WINDOW_HEIGHT {
            warn!(window_height = self.window_height, min = MIN_WINDOW_HEIGHT, "window_height below minimum, clamping");
            self.window_height = MIN_WINDOW_HEIGHT;
        } else if self.window_height > MAX_WINDOW_DIMENSION {
            warn!(window_height = self.window_height, max = MAX_WINDOW_DIMENSION, "window_height exceeds maximum, clamping");
            self.window_height = MAX_WINDOW_DIMENSION;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = EditorSettings::load_from(&path);
        assert_eq!(settings, EditorSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "card_dir": "/cards" }"#).unwrap();

        let settings = EditorSettings::load_from(&path);
        assert_eq!(settings.card_dir, PathBuf::from("/cards"));
        assert_eq!(settings.export_root, PathBuf::from("."));
        assert_eq!(settings.window_width, 900.0);
    }

    #[test]
    fn test_invalid_json_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ broken").unwrap();

        assert_eq!(EditorSettings::load_from(&path), EditorSettings::default());
    }

    #[test]
    fn test_window_size_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "window_width": 10, "window_height": 99999 }"#).unwrap();

        let settings = EditorSettings::load_from(&path);
        assert_eq!(settings.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(settings.window_height, MAX_WINDOW_DIMENSION);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = EditorSettings {
            card_dir: PathBuf::from("/home/me/cards"),
            export_root: PathBuf::from("/home/me/exports"),
            window_width: 1024.0,
            window_height: 768.0,
        };

        settings.save_to(&path).unwrap();
        assert_eq!(EditorSettings::load_from(&path), settings);
    }

    #[test]
    fn test_remember_card_path() {
        let mut settings = EditorSettings::default();
        settings.remember_card_path(Path::new("/cards/dragons/drakon.json"));
        assert_eq!(settings.card_dir, PathBuf::from("/cards/dragons"));

        settings.remember_card_path(Path::new("bare.json"));
        assert_eq!(settings.card_dir, PathBuf::from("/cards/dragons"));
    }
}
