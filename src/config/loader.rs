//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! parameters from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{BenefitFloors, EngineConfig, LawMetadata, ParametersConfig, SeniorityCap};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/lft2015/
/// ├── law.yaml         # Law metadata
/// └── parameters.yaml  # Minimum wage cap and statutory floors
/// ```
///
/// # Example
///
/// ```no_run
/// use finiquito_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/lft2015")?;
/// println!("Seniority cap: ${}/day", loader.seniority_cap().daily_ceiling());
/// # Ok::<(), finiquito_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<LawMetadata>(&path.join("law.yaml"))?;
        let parameters = Self::load_yaml::<ParametersConfig>(&path.join("parameters.yaml"))?;

        let config = EngineConfig::new(metadata, parameters)?;
        debug!(
            path = %path.display(),
            law_code = %config.law().code,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration (e.g. [`EngineConfig::lft_2015`]).
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the law metadata.
    pub fn law(&self) -> &LawMetadata {
        self.config.law()
    }

    /// Returns the seniority premium cap.
    pub fn seniority_cap(&self) -> &SeniorityCap {
        self.config.seniority_cap()
    }

    /// Returns the statutory benefit floors.
    pub fn benefit_floors(&self) -> &BenefitFloors {
        self.config.benefit_floors()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(EngineConfig::lft_2015())
    }
}
