//! Configuration loading and management for the Finiquito Engine.
//!
//! This module provides functionality to load the statutory parameters from
//! YAML files: law metadata, the seniority premium cap and the benefit floors.
//! A built-in LFT 2015 rule set is available through [`EngineConfig::lft_2015`].
//!
//! # Example
//!
//! ```no_run
//! use finiquito_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/lft2015").unwrap();
//! println!("Loaded rules: {}", config.law().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BenefitFloors, EngineConfig, LawMetadata, ParametersConfig, SeniorityCap};
