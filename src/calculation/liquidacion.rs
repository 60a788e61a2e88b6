//! Liquidación (indemnity) calculation functionality.
//!
//! This module builds the indemnity items owed on unjustified dismissal:
//! the constitutional indemnity and back pay for the conciliation scenario,
//! plus the 20-days-per-year indemnity for the litigation-maximum scenario.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Antiquity, AuditStep, CalculatorInput, PaymentConcept};

use super::finiquito::ConceptResult;
use super::money::{checked_product, display_amount, round_money};
use super::termination_rules::{IndemnityRule, rules_for};

/// The clause reference for the constitutional indemnity and back pay.
pub const CONSTITUTIONAL_INDEMNITY_CLAUSE: &str = "Art. 48 LFT";

/// The clause reference for the 20-days-per-year indemnity.
pub const TWENTY_DAYS_CLAUSE: &str = "Art. 50 fr. II LFT";

/// Days of integrated salary in the constitutional indemnity (three months).
pub const CONSTITUTIONAL_INDEMNITY_DAYS: u32 = 90;

/// Days per month used to convert months of back pay into days.
pub const DAYS_PER_MONTH: u32 = 30;

/// Days of integrated salary per year of service when reinstatement is refused.
pub const INDEMNITY_DAYS_PER_YEAR: u32 = 20;

/// The liquidación items for both scenarios, with their audit steps.
#[derive(Debug, Clone, Default)]
pub struct LiquidacionResult {
    /// Items of the conciliation scenario (A). Empty when no indemnity is owed.
    pub scenario_a: Vec<PaymentConcept>,
    /// Items of the litigation-maximum scenario (B): A's items plus one more.
    /// `None` when the cause carries no indemnity.
    pub scenario_b: Option<Vec<PaymentConcept>>,
    /// One audit step per rule evaluated, in evaluation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the constitutional indemnity: `90 × SDI`.
pub fn calculate_constitutional_indemnity(
    integrated_daily_salary: Decimal,
    step_number: u32,
) -> EngineResult<ConceptResult> {
    let amount = round_money(checked_product(
        "Indemnización Constitucional",
        Decimal::from(CONSTITUTIONAL_INDEMNITY_DAYS),
        integrated_daily_salary,
    )?);

    let audit_step = AuditStep {
        step_number,
        rule_id: "indemnizacion_constitucional".to_string(),
        rule_name: "Indemnización Constitucional".to_string(),
        clause_ref: CONSTITUTIONAL_INDEMNITY_CLAUSE.to_string(),
        input: serde_json::json!({
            "integrated_daily_salary": integrated_daily_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "days": CONSTITUTIONAL_INDEMNITY_DAYS,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} días x ${} SDI = ${}",
            CONSTITUTIONAL_INDEMNITY_DAYS,
            integrated_daily_salary.normalize(),
            amount
        ),
    };

    Ok(ConceptResult {
        concept: Some(PaymentConcept::new(
            "Indemnización Constitucional",
            amount,
            "3 Meses de Salario Diario Integrado",
        )),
        audit_step,
    })
}

/// Calculates back pay (salarios vencidos): `months × 30 × SDI`.
///
/// No concept when `months` is zero.
pub fn calculate_lost_wages(
    months: Decimal,
    integrated_daily_salary: Decimal,
    step_number: u32,
) -> EngineResult<ConceptResult> {
    if months <= Decimal::ZERO {
        let audit_step = AuditStep {
            step_number,
            rule_id: "salarios_vencidos".to_string(),
            rule_name: "Salarios Vencidos".to_string(),
            clause_ref: CONSTITUTIONAL_INDEMNITY_CLAUSE.to_string(),
            input: serde_json::json!({
                "months_of_lost_wages": months.normalize().to_string()
            }),
            output: serde_json::json!({
                "included": false,
                "amount": "0.00"
            }),
            reasoning: "No months of back pay estimated - concept omitted".to_string(),
        };
        return Ok(ConceptResult {
            concept: None,
            audit_step,
        });
    }

    let days = checked_product("Salarios Vencidos", months, Decimal::from(DAYS_PER_MONTH))?;
    let amount = round_money(checked_product(
        "Salarios Vencidos",
        days,
        integrated_daily_salary,
    )?);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salarios_vencidos".to_string(),
        rule_name: "Salarios Vencidos".to_string(),
        clause_ref: CONSTITUTIONAL_INDEMNITY_CLAUSE.to_string(),
        input: serde_json::json!({
            "months_of_lost_wages": months.normalize().to_string(),
            "integrated_daily_salary": integrated_daily_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "included": true,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} meses x {} días x ${} SDI = ${}",
            months.normalize(),
            DAYS_PER_MONTH,
            integrated_daily_salary.normalize(),
            amount
        ),
    };

    Ok(ConceptResult {
        concept: Some(PaymentConcept::new(
            "Salarios Vencidos",
            amount,
            format!("{} meses estimados", months.normalize()),
        )),
        audit_step,
    })
}

/// Calculates the 20-days-per-year indemnity: `(total_days / 365) × 20 × SDI`.
pub fn calculate_twenty_days_per_year(
    antiquity: &Antiquity,
    integrated_daily_salary: Decimal,
    step_number: u32,
) -> EngineResult<ConceptResult> {
    let indemnity_days = Decimal::from(antiquity.total_days)
        / Decimal::from(Antiquity::DAYS_PER_YEAR)
        * Decimal::from(INDEMNITY_DAYS_PER_YEAR);
    let amount = round_money(checked_product(
        "Indemnización 20 días/año",
        indemnity_days,
        integrated_daily_salary,
    )?);

    let audit_step = AuditStep {
        step_number,
        rule_id: "indemnizacion_20_dias".to_string(),
        rule_name: "Indemnización 20 días/año".to_string(),
        clause_ref: TWENTY_DAYS_CLAUSE.to_string(),
        input: serde_json::json!({
            "total_days": antiquity.total_days,
            "integrated_daily_salary": integrated_daily_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "indemnity_days": display_amount(indemnity_days),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} / 365 x {} días x ${} SDI = ${}",
            antiquity.total_days,
            INDEMNITY_DAYS_PER_YEAR,
            integrated_daily_salary.normalize(),
            amount
        ),
    };

    Ok(ConceptResult {
        concept: Some(PaymentConcept::new(
            "Indemnización 20 días/año",
            amount,
            format!(
                "Negativa de reinstalación ({} días)",
                display_amount(indemnity_days)
            ),
        )),
        audit_step,
    })
}

/// Builds the liquidación sequences for both scenarios.
///
/// Causes without indemnity produce an empty scenario A, no scenario B and no
/// audit steps. Numeric inputs are expected to be non-negative already.
pub fn build_liquidacion(
    input: &CalculatorInput,
    antiquity: &Antiquity,
    first_step: u32,
) -> EngineResult<LiquidacionResult> {
    if rules_for(input.cause).indemnity == IndemnityRule::None {
        return Ok(LiquidacionResult::default());
    }

    let mut scenario_a = Vec::new();
    let mut audit_steps = Vec::new();
    let mut step_number = first_step;

    let constitutional =
        calculate_constitutional_indemnity(input.integrated_daily_salary, step_number)?;
    scenario_a.extend(constitutional.concept);
    audit_steps.push(constitutional.audit_step);
    step_number += 1;

    let lost_wages = calculate_lost_wages(
        input.months_of_lost_wages,
        input.integrated_daily_salary,
        step_number,
    )?;
    scenario_a.extend(lost_wages.concept);
    audit_steps.push(lost_wages.audit_step);
    step_number += 1;

    let twenty_days =
        calculate_twenty_days_per_year(antiquity, input.integrated_daily_salary, step_number)?;
    let mut scenario_b = scenario_a.clone();
    scenario_b.extend(twenty_days.concept);
    audit_steps.push(twenty_days.audit_step);

    Ok(LiquidacionResult {
        scenario_a,
        scenario_b: Some(scenario_b),
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TerminationCause;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input(cause: TerminationCause, months: &str) -> CalculatorInput {
        CalculatorInput {
            company_name: "Acme".to_string(),
            worker_name: "Ana López".to_string(),
            start_date: "2020-01-01".to_string(),
            end_date: "2024-01-01".to_string(),
            pending_worked_days: Decimal::ZERO,
            pending_overtime_hours: Decimal::ZERO,
            daily_salary: dec("300"),
            integrated_daily_salary: dec("350"),
            base_aguinaldo_days: dec("15"),
            vacation_premium_percentage: dec("25"),
            cause,
            months_of_lost_wages: dec(months),
        }
    }

    /// LQ-001: constitutional indemnity is 90 days of SDI
    #[test]
    fn test_constitutional_indemnity() {
        let result = calculate_constitutional_indemnity(dec("350"), 1).unwrap();
        let concept = result.concept.unwrap();

        assert_eq!(concept.concept, "Indemnización Constitucional");
        assert_eq!(concept.amount, dec("31500.00"));
        assert_eq!(concept.description, "3 Meses de Salario Diario Integrado");
        assert_eq!(result.audit_step.clause_ref, "Art. 48 LFT");
    }

    /// LQ-002: back pay is 30 days of SDI per month
    #[test]
    fn test_lost_wages_two_months() {
        let result = calculate_lost_wages(dec("2"), dec("350"), 1).unwrap();
        let concept = result.concept.unwrap();

        assert_eq!(concept.amount, dec("21000.00"));
        assert_eq!(concept.description, "2 meses estimados");
    }

    #[test]
    fn test_lost_wages_fractional_months() {
        // 1.5 * 30 * 520 = 23400
        let result = calculate_lost_wages(dec("1.5"), dec("520"), 1).unwrap();
        assert_eq!(result.concept.unwrap().amount, dec("23400.00"));
    }

    #[test]
    fn test_lost_wages_omitted_when_zero() {
        let result = calculate_lost_wages(Decimal::ZERO, dec("350"), 1).unwrap();
        assert!(result.concept.is_none());
    }

    /// LQ-003: 20 days per year, proportional
    #[test]
    fn test_twenty_days_per_year() {
        let antiquity = Antiquity::from_total_days(1461);
        let result = calculate_twenty_days_per_year(&antiquity, dec("350"), 1).unwrap();
        let concept = result.concept.unwrap();

        // 1461 / 365 * 20 * 350 = 28019.18
        assert_eq!(concept.amount, dec("28019.18"));
        assert_eq!(concept.description, "Negativa de reinstalación (80.05 días)");
        assert_eq!(result.audit_step.clause_ref, "Art. 50 fr. II LFT");
    }

    /// LQ-004: resignation and justified dismissal owe no indemnity
    #[test]
    fn test_no_indemnity_for_resignation_or_justified_dismissal() {
        let antiquity = Antiquity::from_total_days(1461);
        for cause in [TerminationCause::Renuncia, TerminationCause::DespidoJustificado] {
            let result = build_liquidacion(&create_test_input(cause, "2"), &antiquity, 1).unwrap();
            assert!(result.scenario_a.is_empty());
            assert!(result.scenario_b.is_none());
            assert!(result.audit_steps.is_empty());
        }
    }

    /// LQ-005: unjustified dismissal builds both scenarios
    #[test]
    fn test_unjustified_dismissal_scenarios() {
        let antiquity = Antiquity::from_total_days(1461);
        let input = create_test_input(TerminationCause::DespidoInjustificado, "2");

        let result = build_liquidacion(&input, &antiquity, 9).unwrap();

        let a: Vec<(&str, Decimal)> = result
            .scenario_a
            .iter()
            .map(|c| (c.concept.as_str(), c.amount))
            .collect();
        assert_eq!(
            a,
            vec![
                ("Indemnización Constitucional", dec("31500.00")),
                ("Salarios Vencidos", dec("21000.00")),
            ]
        );

        let b = result.scenario_b.unwrap();
        assert_eq!(b.len(), 3);
        assert_eq!(&b[..2], &result.scenario_a[..]);
        assert_eq!(b[2].concept, "Indemnización 20 días/año");
        assert_eq!(b[2].amount, dec("28019.18"));

        let steps: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(steps, vec![9, 10, 11]);
    }

    #[test]
    fn test_unjustified_dismissal_without_back_pay() {
        let antiquity = Antiquity::from_total_days(1461);
        let input = create_test_input(TerminationCause::DespidoInjustificado, "0");

        let result = build_liquidacion(&input, &antiquity, 1).unwrap();

        assert_eq!(result.scenario_a.len(), 1);
        assert_eq!(result.scenario_a[0].concept, "Indemnización Constitucional");
        assert_eq!(result.scenario_b.unwrap().len(), 2);
    }

    #[test]
    fn test_out_of_range_salary_is_an_error() {
        // 90 x SDI overflows the Decimal range
        let antiquity = Antiquity::from_total_days(1461);
        let mut input = create_test_input(TerminationCause::DespidoInjustificado, "2");
        input.integrated_daily_salary = dec("1000000000000000000000000000");

        let err = build_liquidacion(&input, &antiquity, 1).unwrap_err();

        assert!(matches!(err, crate::error::EngineError::CalculationError { .. }));
        assert!(err.to_string().contains("Indemnización Constitucional"));
    }
}
