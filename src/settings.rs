//! Runtime settings
//!
//! Stored as JSON next to the custom level pack. Missing keys fall back to
//! the compiled defaults in [`crate::consts`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::VehicleConfig;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physical constants of the player vehicle
    pub vehicle: VehicleConfig,
    /// Id of the level opened on launch
    pub starting_level: u32,
    /// Where user-authored levels are kept
    pub custom_levels_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vehicle: VehicleConfig::default(),
            starting_level: 1,
            custom_levels_path: PathBuf::from("precision_parker_custom_levels.json"),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.vehicle.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from disk, using defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved");
        Ok(())
    }
}
