//! Path resolution for settings files

use minirag_core::Settings;
use std::path::{Path, PathBuf};

/// Resolves standard locations for minirag files
#[derive(Debug, Clone)]
pub struct Paths {
    pub config_dir: PathBuf,
}

impl Paths {
    /// Rooted at the platform config directory (`~/.config` on Linux)
    pub fn new() -> std::io::Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "config directory not found")
        })?;

        Ok(Self {
            config_dir: base.join("minirag"),
        })
    }

    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get settings.json path
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Read settings from JSON, or defaults when the file doesn't exist
pub fn load_settings(path: &Path) -> std::io::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
