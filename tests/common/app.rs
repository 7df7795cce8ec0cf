//! Isolated picker environment backed by a temporary directory.

use std::path::PathBuf;

use colour_engine::Oklch;
use colourpicker::models::{AppConfig, RecentColours};
use colourpicker::services::{ColourPicker, JsonFileStore};
use tempfile::TempDir;

/// A config whose history file lives in its own temporary directory.
///
/// The directory is removed when the environment is dropped.
pub struct TestEnv {
    pub dir: TempDir,
    pub config: AppConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(mut config: AppConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        config.history_file = dir.path().join("recent_colours.json");
        Self { dir, config }
    }

    /// Load a config from YAML, then point its history into the temp dir.
    pub fn from_yaml(yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("colourpicker.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");

        let mut config = AppConfig::load(Some(path.as_path()));
        config.history_file = dir.path().join("recent_colours.json");
        Self { dir, config }
    }

    pub fn history_path(&self) -> PathBuf {
        self.config.history_file.clone()
    }

    /// A fresh store handle, as a new process would open it.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.history_path())
    }

    pub fn picker(&self, colour: Oklch) -> ColourPicker {
        ColourPicker::from_config(&self.config, colour)
    }

    pub fn recent(&self) -> RecentColours {
        RecentColours::load(&self.store()).expect("Failed to load recent colours")
    }

    /// Add colours in order and persist them, like repeated picks.
    pub fn remember(&self, colours: &[Oklch]) {
        let store = self.store();
        let mut recent = RecentColours::load(&store).expect("Failed to load recent colours");
        for colour in colours {
            recent.add(*colour);
        }
        recent.save(&store).expect("Failed to save recent colours");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
