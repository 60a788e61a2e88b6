//! Calculator input model and related types.
//!
//! This module defines the [`CalculatorInput`] record consumed by the engine
//! and the [`TerminationCause`] enum that drives every conditional rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reason the employment relationship ended.
///
/// This is a closed set: every branch of the legal rules is keyed on it.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::TerminationCause;
///
/// let cause: TerminationCause = serde_json::from_str("\"DESPIDO_INJUSTIFICADO\"").unwrap();
/// assert_eq!(cause, TerminationCause::DespidoInjustificado);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminationCause {
    /// Voluntary resignation by the worker.
    Renuncia,
    /// Dismissal for a cause listed in Art. 47 LFT.
    DespidoJustificado,
    /// Dismissal without a legally justified cause.
    DespidoInjustificado,
}

impl TerminationCause {
    /// Returns the wire code for this cause (e.g. `"RENUNCIA"`).
    pub fn code(&self) -> &'static str {
        match self {
            TerminationCause::Renuncia => "RENUNCIA",
            TerminationCause::DespidoJustificado => "DESPIDO_JUSTIFICADO",
            TerminationCause::DespidoInjustificado => "DESPIDO_INJUSTIFICADO",
        }
    }
}

/// The request record for a settlement calculation.
///
/// Dates are kept as the raw strings the caller supplied so they can be
/// echoed back and exported verbatim; the engine parses them on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Employer name, used only for display and export.
    pub company_name: String,
    /// Worker name, used only for display and export.
    pub worker_name: String,
    /// Start of the employment relationship (ISO date).
    pub start_date: String,
    /// End of the employment relationship (ISO date).
    pub end_date: String,
    /// Days worked but not yet paid.
    pub pending_worked_days: Decimal,
    /// Overtime hours worked but not yet paid.
    pub pending_overtime_hours: Decimal,
    /// Ordinary daily wage.
    pub daily_salary: Decimal,
    /// Integrated daily salary (SDI), the base for indemnities.
    pub integrated_daily_salary: Decimal,
    /// Year-end bonus days per year (statutory floor 15).
    pub base_aguinaldo_days: Decimal,
    /// Vacation premium as a percentage (statutory floor 25).
    pub vacation_premium_percentage: Decimal,
    /// Why the relationship ended.
    pub cause: TerminationCause,
    /// Estimated months of back pay; only used for unjustified dismissal.
    pub months_of_lost_wages: Decimal,
}
