//! Settings Persistence
//!
//! Locates the configuration file in the platform config directory and
//! loads or saves it, falling back to defaults when nothing is stored yet.

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "seatplan";
const CONFIG_FILE: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
    config: Config,
}

impl SettingsPersistence {
    /// Default config file location, e.g. `~/.config/seatplan/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load settings from the default location
    pub fn load_default() -> SettingsResult<Self> {
        Self::load(&Self::default_path()?)
    }

    /// Load settings from `path`, or use defaults if the file does not exist
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let config = if path.exists() {
            Config::load_from_file(path)?
        } else {
            tracing::info!(
                "No config at {}, using defaults",
                path.display()
            );
            Config::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Save settings, creating the parent directory when needed
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e)))?;
        }
        self.config.save_to_file(&self.path)?;
        tracing::info!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Path the settings are stored at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.config.validate()
    }
}
