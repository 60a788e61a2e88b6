//! Finiquito (acquired-rights) calculation functionality.
//!
//! This module builds the payment concepts owed on every termination,
//! whatever the cause: proportional aguinaldo, proportional vacation,
//! vacation premium, pending days, pending overtime and, when applicable,
//! the seniority premium.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{Antiquity, AuditStep, CalculatorInput, PaymentConcept};

use super::money::{checked_product, display_amount, float_percentage, round_money};
use super::seniority_premium::calculate_seniority_premium;
use super::vacation_table::{VACATION_TABLE_CLAUSE, legal_vacation_days};

/// The clause reference for the year-end bonus.
pub const AGUINALDO_CLAUSE: &str = "Art. 87 LFT";

/// The clause reference for the vacation premium.
pub const VACATION_PREMIUM_CLAUSE: &str = "Art. 80 LFT";

/// The clause reference for unpaid worked days.
pub const PENDING_DAYS_CLAUSE: &str = "Art. 82 LFT";

/// The clause reference for overtime pay.
pub const OVERTIME_CLAUSE: &str = "Art. 67 LFT";

/// Ordinary hours in a working day, used to derive the hourly rate.
pub const HOURS_PER_WORKDAY: u32 = 8;

/// Flat overtime multiplier applied to every pending hour.
pub const OVERTIME_MULTIPLIER: u32 = 2;

/// The result of a single concept rule, including the audit step.
#[derive(Debug, Clone)]
pub struct ConceptResult {
    /// The payment concept, if the rule produced one.
    pub concept: Option<PaymentConcept>,
    /// The audit step recording this rule.
    pub audit_step: AuditStep,
}

/// The proportional vacation result, which the vacation premium builds on.
#[derive(Debug, Clone)]
pub struct VacationResult {
    /// The proportional vacation concept.
    pub concept: PaymentConcept,
    /// Statutory vacation days per year for the worker's seniority.
    pub legal_days: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The finiquito items in display order, with their audit steps.
#[derive(Debug, Clone)]
pub struct FiniquitoResult {
    /// Payment concepts in display order.
    pub items: Vec<PaymentConcept>,
    /// One audit step per rule evaluated, in evaluation order.
    pub audit_steps: Vec<AuditStep>,
}

fn fraction_of_year(days: u32) -> Decimal {
    Decimal::from(days) / Decimal::from(Antiquity::DAYS_PER_YEAR)
}

/// Calculates the proportional year-end bonus (aguinaldo).
///
/// `(days_partial / 365) × base_days × daily_salary`, rounded to cents.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::calculate_aguinaldo;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_aguinaldo(1, Decimal::from(15), Decimal::from(300), 1).unwrap();
/// let concept = result.concept.unwrap();
/// assert_eq!(concept.amount, Decimal::from_str("12.33").unwrap());
/// ```
pub fn calculate_aguinaldo(
    days_partial: u32,
    base_days: Decimal,
    daily_salary: Decimal,
    step_number: u32,
) -> EngineResult<ConceptResult> {
    let proportional_days =
        checked_product("Aguinaldo Proporcional", fraction_of_year(days_partial), base_days)?;
    let amount = round_money(checked_product(
        "Aguinaldo Proporcional",
        proportional_days,
        daily_salary,
    )?);

    let audit_step = AuditStep {
        step_number,
        rule_id: "aguinaldo_proporcional".to_string(),
        rule_name: "Aguinaldo Proporcional".to_string(),
        clause_ref: AGUINALDO_CLAUSE.to_string(),
        input: serde_json::json!({
            "days_partial": days_partial,
            "base_aguinaldo_days": base_days.normalize().to_string(),
            "daily_salary": daily_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "proportional_days": display_amount(proportional_days),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} / 365 x {} días x ${} = ${}",
            days_partial,
            base_days.normalize(),
            daily_salary.normalize(),
            amount
        ),
    };

    Ok(ConceptResult {
        concept: Some(PaymentConcept::new(
            "Aguinaldo Proporcional",
            amount,
            format!(
                "{} días proporcionales ({} días trabajados año actual)",
                display_amount(proportional_days),
                days_partial
            ),
        )),
        audit_step,
    })
}

/// Calculates the proportional vacation pay for the current service year.
///
/// `(days_partial / 365) × legal_vacation_days(years) × daily_salary`, rounded to cents.
pub fn calculate_proportional_vacation(
    antiquity: &Antiquity,
    daily_salary: Decimal,
    step_number: u32,
) -> EngineResult<VacationResult> {
    let legal_days = legal_vacation_days(antiquity.years);
    let proportional_days = fraction_of_year(antiquity.days_partial) * Decimal::from(legal_days);
    let amount = round_money(checked_product(
        "Vacaciones Proporcionales",
        proportional_days,
        daily_salary,
    )?);

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacaciones_proporcionales".to_string(),
        rule_name: "Vacaciones Proporcionales".to_string(),
        clause_ref: VACATION_TABLE_CLAUSE.to_string(),
        input: serde_json::json!({
            "years": antiquity.years,
            "days_partial": antiquity.days_partial,
            "daily_salary": daily_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "legal_days": legal_days,
            "proportional_days": display_amount(proportional_days),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} años cumplidos otorgan {} días/año; {} / 365 x {} x ${} = ${}",
            antiquity.years,
            legal_days,
            antiquity.days_partial,
            legal_days,
            daily_salary.normalize(),
            amount
        ),
    };

    Ok(VacationResult {
        concept: PaymentConcept::new(
            "Vacaciones Proporcionales",
            amount,
            format!(
                "{} días pendientes (Base: {} días/año)",
                display_amount(proportional_days),
                legal_days
            ),
        ),
        legal_days,
        audit_step,
    })
}

/// Calculates the vacation premium on an already-rounded vacation amount.
///
/// The premium is rounded again on its own, so it can differ by a cent from
/// applying the percentage to the unrounded vacation pay. Rounding follows
/// [`float_percentage`], so half-cent products can round down.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::calculate_vacation_premium;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result =
///     calculate_vacation_premium(Decimal::from_str("59.18").unwrap(), Decimal::from(25), 1)
///         .unwrap();
/// assert_eq!(result.concept.unwrap().amount, Decimal::from_str("14.80").unwrap());
/// ```
pub fn calculate_vacation_premium(
    vacation_amount: Decimal,
    percentage: Decimal,
    step_number: u32,
) -> EngineResult<ConceptResult> {
    let amount = float_percentage("Prima Vacacional", vacation_amount, percentage)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "prima_vacacional".to_string(),
        rule_name: "Prima Vacacional".to_string(),
        clause_ref: VACATION_PREMIUM_CLAUSE.to_string(),
        input: serde_json::json!({
            "vacation_amount": vacation_amount.to_string(),
            "percentage": percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} x {}% = ${}",
            vacation_amount,
            percentage.normalize(),
            amount
        ),
    };

    Ok(ConceptResult {
        concept: Some(PaymentConcept::new(
            "Prima Vacacional",
            amount,
            format!("{}% sobre vacaciones", percentage.normalize()),
        )),
        audit_step,
    })
}

/// Calculates pay for worked days not yet paid. No concept when `days` is zero.
pub fn calculate_pending_days(
    days: Decimal,
    daily_salary: Decimal,
    step_number: u32,
) -> EngineResult<ConceptResult> {
    if days <= Decimal::ZERO {
        let audit_step = AuditStep {
            step_number,
            rule_id: "dias_trabajados_pendientes".to_string(),
            rule_name: "Días Trabajados Pendientes".to_string(),
            clause_ref: PENDING_DAYS_CLAUSE.to_string(),
            input: serde_json::json!({
                "pending_worked_days": days.normalize().to_string()
            }),
            output: serde_json::json!({
                "included": false,
                "amount": "0.00"
            }),
            reasoning: "No pending worked days - concept omitted".to_string(),
        };
        return Ok(ConceptResult {
            concept: None,
            audit_step,
        });
    }

    let amount = round_money(checked_product(
        "Días Trabajados Pendientes",
        days,
        daily_salary,
    )?);
    let audit_step = AuditStep {
        step_number,
        rule_id: "dias_trabajados_pendientes".to_string(),
        rule_name: "Días Trabajados Pendientes".to_string(),
        clause_ref: PENDING_DAYS_CLAUSE.to_string(),
        input: serde_json::json!({
            "pending_worked_days": days.normalize().to_string(),
            "daily_salary": daily_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "included": true,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} días x ${} = ${}",
            days.normalize(),
            daily_salary.normalize(),
            amount
        ),
    };

    Ok(ConceptResult {
        concept: Some(PaymentConcept::new(
            "Días Trabajados Pendientes",
            amount,
            format!("{} días", days.normalize()),
        )),
        audit_step,
    })
}

/// Estimates pay for pending overtime at a flat double rate.
///
/// `hours × (daily_salary / 8) × 2`. The statutory double-then-triple tiers
/// (Art. 67–68 LFT) are not applied. No concept when `hours` is zero.
pub fn calculate_overtime(
    hours: Decimal,
    daily_salary: Decimal,
    step_number: u32,
) -> EngineResult<ConceptResult> {
    if hours <= Decimal::ZERO {
        let audit_step = AuditStep {
            step_number,
            rule_id: "horas_extra".to_string(),
            rule_name: "Horas Extra".to_string(),
            clause_ref: OVERTIME_CLAUSE.to_string(),
            input: serde_json::json!({
                "pending_overtime_hours": hours.normalize().to_string()
            }),
            output: serde_json::json!({
                "included": false,
                "amount": "0.00"
            }),
            reasoning: "No pending overtime hours - concept omitted".to_string(),
        };
        return Ok(ConceptResult {
            concept: None,
            audit_step,
        });
    }

    let hourly_rate = daily_salary / Decimal::from(HOURS_PER_WORKDAY);
    let hours_pay = checked_product("Horas Extra", hours, hourly_rate)?;
    let amount = round_money(checked_product(
        "Horas Extra",
        hours_pay,
        Decimal::from(OVERTIME_MULTIPLIER),
    )?);

    let audit_step = AuditStep {
        step_number,
        rule_id: "horas_extra".to_string(),
        rule_name: "Horas Extra".to_string(),
        clause_ref: OVERTIME_CLAUSE.to_string(),
        input: serde_json::json!({
            "pending_overtime_hours": hours.normalize().to_string(),
            "daily_salary": daily_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "included": true,
            "hourly_rate": display_amount(hourly_rate),
            "multiplier": OVERTIME_MULTIPLIER,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} horas x (${} / {}) x {} = ${}",
            hours.normalize(),
            daily_salary.normalize(),
            HOURS_PER_WORKDAY,
            OVERTIME_MULTIPLIER,
            amount
        ),
    };

    Ok(ConceptResult {
        concept: Some(PaymentConcept::new(
            "Horas Extra (Est. Dobles)",
            amount,
            format!("{} horas", hours.normalize()),
        )),
        audit_step,
    })
}

/// Builds the full finiquito sequence.
///
/// Items appear in this order: aguinaldo, vacation, vacation premium,
/// pending days (if any), overtime (if any), seniority premium (if owed).
/// Numeric inputs are expected to be non-negative already. Fails when an
/// amount leaves the `Decimal` range.
pub fn build_finiquito(
    input: &CalculatorInput,
    antiquity: &Antiquity,
    config: &EngineConfig,
    first_step: u32,
) -> EngineResult<FiniquitoResult> {
    let mut items = Vec::new();
    let mut audit_steps = Vec::new();
    let mut step_number = first_step;

    let aguinaldo = calculate_aguinaldo(
        antiquity.days_partial,
        input.base_aguinaldo_days,
        input.daily_salary,
        step_number,
    )?;
    items.extend(aguinaldo.concept);
    audit_steps.push(aguinaldo.audit_step);
    step_number += 1;

    let vacation = calculate_proportional_vacation(antiquity, input.daily_salary, step_number)?;
    let vacation_amount = vacation.concept.amount;
    items.push(vacation.concept);
    audit_steps.push(vacation.audit_step);
    step_number += 1;

    let premium = calculate_vacation_premium(
        vacation_amount,
        input.vacation_premium_percentage,
        step_number,
    )?;
    items.extend(premium.concept);
    audit_steps.push(premium.audit_step);
    step_number += 1;

    let pending_days =
        calculate_pending_days(input.pending_worked_days, input.daily_salary, step_number)?;
    items.extend(pending_days.concept);
    audit_steps.push(pending_days.audit_step);
    step_number += 1;

    let overtime =
        calculate_overtime(input.pending_overtime_hours, input.daily_salary, step_number)?;
    items.extend(overtime.concept);
    audit_steps.push(overtime.audit_step);
    step_number += 1;

    let seniority = calculate_seniority_premium(
        input.cause,
        input.daily_salary,
        antiquity,
        config.seniority_cap(),
        step_number,
    )?;
    items.extend(seniority.concept);
    audit_steps.push(seniority.audit_step);

    Ok(FiniquitoResult { items, audit_steps })
}
