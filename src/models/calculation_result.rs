//! Calculation result models for the Finiquito Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated structures
//! that capture all outputs from a settlement calculation, including payment
//! concepts, scenario totals, and audit traces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Antiquity, CalculatorInput};

/// A single line item of a settlement.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::PaymentConcept;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let concept = PaymentConcept {
///     concept: "Indemnización Constitucional".to_string(),
///     amount: Decimal::from_str("31500.00").unwrap(),
///     description: "3 Meses de Salario Diario Integrado".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConcept {
    /// The name of the concept (e.g., "Prima Vacacional").
    pub concept: String,
    /// The amount, always rounded to cents.
    pub amount: Decimal,
    /// Human-readable summary of the formula inputs.
    pub description: String,
}

impl PaymentConcept {
    /// Creates a new payment concept.
    pub fn new(
        concept: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            concept: concept.into(),
            amount,
            description: description.into(),
        }
    }
}

/// The two item sequences of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Acquired-rights items, common to every termination cause.
    pub finiquito: Vec<PaymentConcept>,
    /// Indemnity items owed because of a dismissal.
    pub liquidacion: Vec<PaymentConcept>,
}

/// A named outcome bundle with subtotals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Display name of the scenario.
    pub name: String,
    /// Items making up the scenario.
    pub breakdown: Breakdown,
    /// Sum of the finiquito items.
    pub subtotal_finiquito: Decimal,
    /// Sum of the liquidación items.
    pub subtotal_liquidacion: Decimal,
    /// Sum of both subtotals.
    pub total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal article for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that are accepted but look legally or logically
/// suspicious. They never stop a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a settlement calculation.
///
/// `scenario_b` is present only for unjustified dismissal, where it holds
/// the litigation-maximum outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The input the result was computed from.
    pub input: CalculatorInput,
    /// The derived length of service.
    pub antiquity: Antiquity,
    /// The primary scenario.
    pub scenario_a: ScenarioResult,
    /// The litigation-maximum scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_b: Option<ScenarioResult>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Iterates over the scenarios in display order (A, then B if present).
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioResult> {
        std::iter::once(&self.scenario_a).chain(self.scenario_b.as_ref())
    }
}
