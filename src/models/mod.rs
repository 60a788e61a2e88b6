//! Core data models for the Finiquito Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod antiquity;
mod calculation_result;
mod calculator_input;

pub use antiquity::Antiquity;
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, Breakdown, CalculationResult, PaymentConcept,
    ScenarioResult,
};
pub use calculator_input::{CalculatorInput, TerminationCause};
