//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the labor-law edition the engine applies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LawMetadata {
    /// Short code for the rule set (e.g., "LFT2015").
    pub code: String,
    /// The human-readable name of the law.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

/// The cap applied to the salary base of the seniority premium.
///
/// Art. 162 LFT limits the base to a multiple of the minimum wage
/// (Art. 486 LFT). Neither value is user-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SeniorityCap {
    /// Reference general minimum wage (SMG), per day.
    pub reference_minimum_wage: Decimal,
    /// How many minimum wages make up the cap.
    pub multiplier: Decimal,
}

impl SeniorityCap {
    /// Returns the capped daily salary ceiling (`multiplier × minimum wage`).
    ///
    /// # Example
    ///
    /// ```
    /// use finiquito_engine::config::SeniorityCap;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let cap = SeniorityCap {
    ///     reference_minimum_wage: Decimal::from_str("248.93").unwrap(),
    ///     multiplier: Decimal::from(2),
    /// };
    /// assert_eq!(cap.daily_ceiling(), Decimal::from_str("497.86").unwrap());
    /// ```
    ///
    /// Saturates at `Decimal::MAX`; [`EngineConfig::new`] rejects such caps.
    pub fn daily_ceiling(&self) -> Decimal {
        self.reference_minimum_wage
            .checked_mul(self.multiplier)
            .unwrap_or(Decimal::MAX)
    }
}

/// Statutory floors for the user-configurable benefits.
///
/// The floors double as defaults when a request omits the value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BenefitFloors {
    /// Minimum year-end bonus days (Art. 87 LFT).
    pub aguinaldo_days: Decimal,
    /// Minimum vacation premium percentage (Art. 80 LFT).
    pub vacation_premium_percentage: Decimal,
}

/// Parameters file structure (`parameters.yaml`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParametersConfig {
    /// Seniority premium cap.
    pub seniority_cap: SeniorityCap,
    /// Statutory benefit floors.
    pub benefit_floors: BenefitFloors,
}

/// The complete engine configuration.
///
/// Immutable once built; calculations only read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    metadata: LawMetadata,
    parameters: ParametersConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts, validating the values.
    pub fn new(metadata: LawMetadata, parameters: ParametersConfig) -> EngineResult<Self> {
        let config = Self {
            metadata,
            parameters,
        };
        config.validate()?;
        Ok(config)
    }

    /// The built-in LFT 2015 rule set with the 2024 general minimum wage.
    pub fn lft_2015() -> Self {
        Self {
            metadata: LawMetadata {
                code: "LFT2015".to_string(),
                name: "Ley Federal del Trabajo (tabla de vacaciones 2015)".to_string(),
                version: "2015".to_string(),
                source_url: "https://www.diputados.gob.mx/LeyesBiblio/ref/lft.htm".to_string(),
            },
            parameters: ParametersConfig {
                seniority_cap: SeniorityCap {
                    reference_minimum_wage: Decimal::new(24893, 2),
                    multiplier: Decimal::from(2),
                },
                benefit_floors: BenefitFloors {
                    aguinaldo_days: Decimal::from(15),
                    vacation_premium_percentage: Decimal::from(25),
                },
            },
        }
    }

    /// Returns the law metadata.
    pub fn law(&self) -> &LawMetadata {
        &self.metadata
    }

    /// Returns the seniority premium cap.
    pub fn seniority_cap(&self) -> &SeniorityCap {
        &self.parameters.seniority_cap
    }

    /// Returns the statutory benefit floors.
    pub fn benefit_floors(&self) -> &BenefitFloors {
        &self.parameters.benefit_floors
    }

    fn validate(&self) -> EngineResult<()> {
        let cap = &self.parameters.seniority_cap;
        if cap.reference_minimum_wage <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "seniority_cap.reference_minimum_wage".to_string(),
                message: format!("must be greater than zero, got {}", cap.reference_minimum_wage),
            });
        }
        if cap.multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "seniority_cap.multiplier".to_string(),
                message: format!("must be greater than zero, got {}", cap.multiplier),
            });
        }
        if cap.reference_minimum_wage.checked_mul(cap.multiplier).is_none() {
            return Err(EngineError::InvalidConfig {
                field: "seniority_cap".to_string(),
                message: "reference_minimum_wage x multiplier is out of range".to_string(),
            });
        }

        let floors = &self.parameters.benefit_floors;
        if floors.aguinaldo_days.is_sign_negative() {
            return Err(EngineError::InvalidConfig {
                field: "benefit_floors.aguinaldo_days".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if floors.vacation_premium_percentage.is_sign_negative() {
            return Err(EngineError::InvalidConfig {
                field: "benefit_floors.vacation_premium_percentage".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::lft_2015()
    }
}
