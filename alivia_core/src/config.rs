//! Configuration file support for Alivia.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/alivia/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Data source configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// JSON file with the medication list; sample data is used when unset
    #[serde(default)]
    pub medications_file: Option<PathBuf>,
}

/// Dose urgency parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_due_soon_minutes")]
    pub due_soon_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            due_soon_minutes: default_due_soon_minutes(),
        }
    }
}

/// How the medication list is presented
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MedicationView {
    #[default]
    Urgency,
    Category,
}

/// Display configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_view: MedicationView,
}

fn default_due_soon_minutes() -> u32 {
    60
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = match Self::default_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{}. Using default config.", e);
                return Ok(Self::default());
            }
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Unable to determine config directory".into()))?;
        Ok(base.join("alivia").join("config.toml"))
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.schedule.due_soon_minutes == 0 {
            return Err(Error::Config(
                "schedule.due_soon_minutes must be greater than zero".into(),
            ));
        }
        if self.schedule.due_soon_minutes > 24 * 60 {
            return Err(Error::Config(format!(
                "schedule.due_soon_minutes must be at most one day, got {}",
                self.schedule.due_soon_minutes
            )));
        }
        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
