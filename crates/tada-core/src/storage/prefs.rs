//! Preferences storage operations

use crate::{models::Preferences, Result};
use std::path::PathBuf;

pub struct PrefsStorage {
    config_dir: PathBuf,
}

impl PrefsStorage {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn load(&self) -> Result<Preferences> {
        let prefs_path = self.config_dir.join("prefs.json");

        if !prefs_path.exists() {
            return Ok(Preferences::default());
        }

        let content = std::fs::read_to_string(prefs_path)?;

        // Handle empty file case
        if content.trim().is_empty() {
            return Ok(Preferences::default());
        }

        let prefs: Preferences = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;

        let prefs_path = self.config_dir.join("prefs.json");
        let content = serde_json::to_string_pretty(prefs)?;
        std::fs::write(prefs_path, content)?;

        Ok(())
    }
}
