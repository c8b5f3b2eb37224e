// batch_config.rs
// Handles loading and saving batch files: a list of syrup jobs in TOML

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::PhysicalConstants;
use crate::error::{ConfigError, Result};
use crate::presets;
use crate::ratio::MassRatio;
use crate::units::{MassUnit, VolumeUnit};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Name of the batch, used in reports
    #[serde(default)]
    pub name: String,
    /// Overrides the 20 °C reference constants when present
    pub constants: Option<PhysicalConstants>,
    /// Jobs that start from a desired final volume
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetJob>,
    /// Jobs that start from known masses
    #[serde(default, rename = "masses")]
    pub masses: Vec<MassesJob>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetJob {
    pub label: String,
    /// Preset id ("light", "simple", "rich") or a literal "sugar:water" ratio
    pub ratio: String,
    pub volume: f64,
    #[serde(default)]
    pub unit: VolumeUnit,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MassesJob {
    pub label: String,
    pub sugar: f64,
    pub water: f64,
    #[serde(default)]
    pub unit: MassUnit,
}

impl BatchConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BatchConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(constants) = &config.constants {
            constants.validate()?;
        }
        debug!(
            path = %path.display(),
            targets = config.targets.len(),
            masses = config.masses.len(),
            "loaded batch config"
        );
        Ok(config)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Constants to evaluate every job with.
    pub fn physical_constants(&self) -> PhysicalConstants {
        self.constants.unwrap_or_default()
    }

    pub fn job_count(&self) -> usize {
        self.targets.len() + self.masses.len()
    }
}

impl TargetJob {
    pub fn to_ratio(&self) -> Result<MassRatio> {
        presets::parse_ratio(&self.ratio)
    }

    pub fn volume_ml(&self) -> f64 {
        self.unit.to_milliliters(self.volume)
    }
}

impl MassesJob {
    /// (sugar, water) in grams.
    pub fn masses_g(&self) -> (f64, f64) {
        (self.unit.to_grams(self.sugar), self.unit.to_grams(self.water))
    }
}
