use bevy::prelude::Resource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::error::AppError;
use super::config::PowerSettings;
use super::resources::StockDefaults;

/// The flat JSON file backing `PowerSettings`.
#[derive(Resource, Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PowerSettings, AppError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, settings: &PowerSettings) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }

    /// Never fails: an unreadable file is replaced by the defaults. The result
    /// is always written back so the file heals on the next load.
    pub fn load_or_default(&self, stock: &StockDefaults) -> PowerSettings {
        let settings = match self.load() {
            Ok(settings) => {
                info!("Loaded power settings from {}", self.path.display());
                settings
            }
            Err(e) => {
                warn!(
                    "Configuration file {} is corrupt (or doesn't exist), creating new one! ({})",
                    self.path.display(),
                    e
                );
                PowerSettings::default()
            }
        };

        for warning in settings.validate(stock) {
            warn!("Power settings: {}", warning);
        }

        if let Err(e) = self.save(&settings) {
            error!("Failed to write power settings to {}: {}", self.path.display(), e);
        }
        settings
    }
}
