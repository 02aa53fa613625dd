//! Configuration for the study planner

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ModeCatalog, SpeedCategory};
use crate::planner::{DEFAULT_FALLBACK_HORIZON_DAYS, DEFAULT_MESSAGES, DEFAULT_REVISION_CAP, PlannerSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Study modes by name
    pub modes: ModeCatalog,

    /// Weakness score used when none is given for the subject
    pub default_weakness: f64,

    /// Learning speed used when none is given for the subject
    pub default_speed: SpeedCategory,

    /// Maximum topics reviewed on one date
    pub revision_cap: usize,

    /// Days until the assumed exam when the given exam date has passed
    pub fallback_horizon_days: u32,

    /// Motivational messages, one is drawn per study day
    pub messages: Vec<String>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modes: ModeCatalog::default(),
            default_weakness: 0.4,
            default_speed: SpeedCategory::Normal,
            revision_cap: DEFAULT_REVISION_CAP,
            fallback_horizon_days: DEFAULT_FALLBACK_HORIZON_DAYS,
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
            log_level: None,
        }
    }
}

impl Config {
    /// Validate configuration before use
    pub fn validate(&self) -> Result<()> {
        if self.modes.is_empty() {
            return Err(eyre::eyre!("No study modes configured"));
        }
        if self.revision_cap == 0 {
            return Err(eyre::eyre!("revision-cap must be at least 1"));
        }
        if self.messages.is_empty() {
            return Err(eyre::eyre!("At least one motivational message is required"));
        }
        if !self.default_weakness.is_finite() {
            return Err(eyre::eyre!("default-weakness must be a number"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config: ./studyplan.yml
        let local_config = PathBuf::from("studyplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // User config: ~/.config/studyplan/studyplan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("studyplan").join("studyplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).context(format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Planner tunables derived from this config
    pub fn planner_settings(&self) -> PlannerSettings {
        PlannerSettings {
            revision_cap: self.revision_cap,
            fallback_horizon_days: self.fallback_horizon_days,
        }
    }
}
