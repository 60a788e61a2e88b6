//! Scenario assembly and aggregation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Breakdown, PaymentConcept, ScenarioResult, TerminationCause};

use super::money::checked_sum;
use super::termination_rules::{IndemnityRule, rules_for};

/// Scenario name when the settlement is a finiquito alone.
pub const SINGLE_SCENARIO_NAME: &str = "Liquidación / Finiquito";

/// Name of the conciliation (minimum) scenario.
pub const CONCILIATION_SCENARIO_NAME: &str = "Escenario A (Conciliación/Mínimo)";

/// Name of the litigation (maximum) scenario.
pub const LITIGATION_SCENARIO_NAME: &str = "Escenario B (Juicio/Máximo)";

/// Returns the scenario names for a cause: the primary name, and the
/// litigation-maximum name when that scenario exists.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::scenario_names;
/// use finiquito_engine::models::TerminationCause;
///
/// assert_eq!(scenario_names(TerminationCause::Renuncia), ("Liquidación / Finiquito", None));
/// ```
pub fn scenario_names(cause: TerminationCause) -> (&'static str, Option<&'static str>) {
    match rules_for(cause).indemnity {
        IndemnityRule::None => (SINGLE_SCENARIO_NAME, None),
        IndemnityRule::Constitutional => {
            (CONCILIATION_SCENARIO_NAME, Some(LITIGATION_SCENARIO_NAME))
        }
    }
}

/// Sums already-rounded item amounts. No further rounding is applied.
pub fn subtotal(items: &[PaymentConcept]) -> EngineResult<Decimal> {
    checked_sum("subtotal", items.iter().map(|item| item.amount))
}

/// Builds a scenario with its subtotals and total.
pub fn assemble_scenario(
    name: impl Into<String>,
    finiquito: Vec<PaymentConcept>,
    liquidacion: Vec<PaymentConcept>,
) -> EngineResult<ScenarioResult> {
    let subtotal_finiquito = subtotal(&finiquito)?;
    let subtotal_liquidacion = subtotal(&liquidacion)?;
    let total = checked_sum("total", [subtotal_finiquito, subtotal_liquidacion])?;

    Ok(ScenarioResult {
        name: name.into(),
        breakdown: Breakdown {
            finiquito,
            liquidacion,
        },
        subtotal_finiquito,
        subtotal_liquidacion,
        total,
    })
}
