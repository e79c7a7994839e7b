//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a legal
//! regime bundle from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{
    BudgetSettings, InsuranceRates, LaborRegime, RegimeMetadata, Thresholds, TimeConstants,
    WageConstants,
};

/// Layout of `regime.yaml`.
#[derive(Debug, Deserialize)]
struct RegimeFile {
    metadata: RegimeMetadata,
    wages: WageConstants,
    time: TimeConstants,
    thresholds: Thresholds,
    budget: BudgetSettings,
}

/// Layout of `insurance.yaml`.
#[derive(Debug, Deserialize)]
struct InsuranceFile {
    insurance: InsuranceRates,
}

/// Loads and provides access to a legal regime.
///
/// # Directory Structure
///
/// ```text
/// config/kr2025/
/// ├── regime.yaml     # Metadata, wage and time constants, thresholds
/// └── insurance.yaml  # Social insurance rates
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kr2025")?;
/// println!("Minimum wage: {}", loader.regime().wages.minimum_hourly);
/// # Ok::<(), labor_cost_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    regime: LaborRegime,
}

impl ConfigLoader {
    /// Loads a regime from the specified directory.
    ///
    /// Fails if a file is missing, is not valid YAML, lacks a field, or
    /// holds a value rejected by [`LaborRegime::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime_file = Self::load_yaml::<RegimeFile>(&path.join("regime.yaml"))?;
        let insurance_file = Self::load_yaml::<InsuranceFile>(&path.join("insurance.yaml"))?;

        let regime = LaborRegime {
            metadata: regime_file.metadata,
            wages: regime_file.wages,
            time: regime_file.time,
            thresholds: regime_file.thresholds,
            insurance: insurance_file.insurance,
            budget: regime_file.budget,
        };
        regime.validate()?;

        info!(
            code = %regime.metadata.code,
            minimum_hourly = %regime.wages.minimum_hourly,
            path = %path.display(),
            "Loaded labor regime"
        );

        Ok(Self { regime })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded regime.
    pub fn regime(&self) -> &LaborRegime {
        &self.regime
    }

    /// Consumes the loader and returns the regime.
    pub fn into_regime(self) -> LaborRegime {
        self.regime
    }
}
