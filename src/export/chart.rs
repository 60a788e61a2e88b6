//! Chart series for the results comparison.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculationResult;

/// Label of the litigation-maximum bar.
pub const MAXIMUM_BAR_LABEL: &str = "Escenario B (Máximo)";

/// One bar of the scenario comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Bar label.
    pub name: String,
    /// Finiquito subtotal.
    pub finiquito: Decimal,
    /// Liquidación subtotal.
    pub liquidacion: Decimal,
}

/// Builds one bar per scenario, A first.
pub fn chart_series(result: &CalculationResult) -> Vec<ChartBar> {
    let mut bars = vec![ChartBar {
        name: result.scenario_a.name.clone(),
        finiquito: result.scenario_a.subtotal_finiquito,
        liquidacion: result.scenario_a.subtotal_liquidacion,
    }];

    if let Some(scenario_b) = &result.scenario_b {
        bars.push(ChartBar {
            name: MAXIMUM_BAR_LABEL.to_string(),
            finiquito: scenario_b.subtotal_finiquito,
            liquidacion: scenario_b.subtotal_liquidacion,
        });
    }

    bars
}
