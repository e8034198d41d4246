//! Persisted user settings.
//!
//! Settings live in a small JSON file. Loading merges whatever the file holds
//! over the defaults, so a missing file or missing keys simply fall back;
//! every change is written back immediately.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::TechRadarError;

/// Default location the visualization scripts are served from.
pub const DEFAULT_ASSET_BASE: &str = "assets";

/// Scripts the visualization needs, in load order.
pub const VISUALIZATION_ASSETS: [&str; 2] = ["d3.v4.min.js", "radar.js"];

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarSettings {
    /// Base URL or directory holding the visualization scripts.
    asset_base: String,
}

impl Default for RadarSettings {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

impl RadarSettings {
    pub fn new(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
        }
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// URLs of the visualization scripts, in load order.
    pub fn asset_urls(&self) -> Vec<String> {
        let base = self.asset_base.trim_end_matches('/');
        VISUALIZATION_ASSETS
            .iter()
            .map(|asset| {
                if base.is_empty() {
                    (*asset).to_string()
                } else {
                    format!("{base}/{asset}")
                }
            })
            .collect()
    }
}

/// Settings bound to the file they are persisted in.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: RadarSettings,
}

impl SettingsStore {
    /// Loads settings from `path`, merged over the defaults.
    ///
    /// A missing file yields the defaults without creating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TechRadarError> {
        let path = path.as_ref();

        let settings = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|source| TechRadarError::Settings {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            debug!(path = path.display().to_string(); "Settings file not found, using defaults");
            RadarSettings::default()
        };

        info!(path = path.display().to_string(); "Settings loaded");
        Ok(Self {
            path: path.to_path_buf(),
            settings,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &RadarSettings {
        &self.settings
    }

    /// Changes the asset base and saves if it differs from the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn set_asset_base(&mut self, asset_base: impl Into<String>) -> Result<(), TechRadarError> {
        let asset_base = asset_base.into();
        if asset_base == self.settings.asset_base {
            return Ok(());
        }

        self.settings.asset_base = asset_base;
        self.save()
    }

    /// Writes the settings to their file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save(&self) -> Result<(), TechRadarError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, content)?;

        info!(path = self.path.display().to_string(); "Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");

        let store = SettingsStore::load(&path).expect("defaults");

        assert_eq!(store.settings(), &RadarSettings::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"unrelated": true}"#).expect("write settings");

        let store = SettingsStore::load(&path).expect("merged");

        assert_eq!(store.settings().asset_base(), DEFAULT_ASSET_BASE);
    }

    #[test]
    fn test_change_is_saved() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.json");

        let mut store = SettingsStore::load(&path).expect("defaults");
        store
            .set_asset_base("https://cdn.example.com/radar/")
            .expect("saved");

        let reloaded = SettingsStore::load(&path).expect("reloaded");
        assert_eq!(
            reloaded.settings().asset_base(),
            "https://cdn.example.com/radar/"
        );
        assert_eq!(
            reloaded.settings().asset_urls(),
            [
                "https://cdn.example.com/radar/d3.v4.min.js",
                "https://cdn.example.com/radar/radar.js",
            ]
        );
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").expect("write settings");

        let err = SettingsStore::load(&path).expect_err("invalid JSON");
        assert!(matches!(err, TechRadarError::Settings { .. }));
    }
}
