//! Seniority premium (prima de antigüedad) calculation.
//!
//! This module decides whether the premium is owed for a termination cause
//! and computes it as 12 days of capped salary per year of service
//! (Art. 162 LFT), proportional for the partial year.

use rust_decimal::Decimal;

use crate::config::SeniorityCap;
use crate::error::EngineResult;
use crate::models::{Antiquity, AuditStep, PaymentConcept, TerminationCause};

use super::money::{checked_product, display_amount, round_money};
use super::termination_rules::{SeniorityPremiumRule, rules_for};

/// The clause reference for the seniority premium.
pub const SENIORITY_PREMIUM_CLAUSE: &str = "Art. 162 LFT";

/// The concept name used in the finiquito.
pub const SENIORITY_PREMIUM_CONCEPT: &str = "Prima de Antigüedad";

/// Days of salary granted per year of service.
pub const SENIORITY_DAYS_PER_YEAR: u32 = 12;

/// Whether the seniority premium is owed, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeniorityPremiumDecision {
    /// True when the premium must be paid.
    pub include: bool,
    /// Human-readable reason, appended to the concept description.
    pub reason: String,
}

/// The result of evaluating the seniority premium, including the audit step.
#[derive(Debug, Clone)]
pub struct SeniorityPremiumResult {
    /// The payment concept, if the premium is owed.
    pub concept: Option<PaymentConcept>,
    /// The daily salary after applying the cap.
    pub capped_salary: Decimal,
    /// The audit step recording the decision.
    pub audit_step: AuditStep,
}

fn cause_subject(cause: TerminationCause) -> &'static str {
    match cause {
        TerminationCause::Renuncia => "Renuncia",
        TerminationCause::DespidoJustificado | TerminationCause::DespidoInjustificado => "Despido",
    }
}

/// Decides whether the seniority premium is owed.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::decide_seniority_premium;
/// use finiquito_engine::models::{Antiquity, TerminationCause};
///
/// let short = Antiquity::from_total_days(4 * 365);
/// assert!(!decide_seniority_premium(TerminationCause::Renuncia, &short).include);
/// assert!(decide_seniority_premium(TerminationCause::DespidoJustificado, &short).include);
///
/// let long = Antiquity::from_total_days(15 * 365);
/// assert!(decide_seniority_premium(TerminationCause::Renuncia, &long).include);
/// ```
pub fn decide_seniority_premium(
    cause: TerminationCause,
    antiquity: &Antiquity,
) -> SeniorityPremiumDecision {
    let subject = cause_subject(cause);

    match rules_for(cause).seniority_premium {
        SeniorityPremiumRule::Always => SeniorityPremiumDecision {
            include: true,
            reason: format!("Aplica por {}", subject),
        },
        SeniorityPremiumRule::MinimumYears(min_years) if antiquity.years >= min_years => {
            SeniorityPremiumDecision {
                include: true,
                reason: format!("{} con {}+ años de antigüedad", subject, min_years),
            }
        }
        SeniorityPremiumRule::MinimumYears(min_years) => SeniorityPremiumDecision {
            include: false,
            reason: format!("No aplica ({} < {} años)", subject, min_years),
        },
    }
}

/// Evaluates the seniority premium for a worker.
///
/// The salary base is `min(daily_salary, cap.daily_ceiling())`; the premium is
/// `(total_days / 365) × 12 × capped_salary`, rounded to cents.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`](crate::error::EngineError) when
/// the premium overflows.
pub fn calculate_seniority_premium(
    cause: TerminationCause,
    daily_salary: Decimal,
    antiquity: &Antiquity,
    cap: &SeniorityCap,
    step_number: u32,
) -> EngineResult<SeniorityPremiumResult> {
    let decision = decide_seniority_premium(cause, antiquity);
    let ceiling = cap.daily_ceiling();
    let capped_salary = daily_salary.min(ceiling);
    let cap_applied = daily_salary > ceiling;

    if !decision.include {
        let audit_step = AuditStep {
            step_number,
            rule_id: "seniority_premium".to_string(),
            rule_name: "Prima de Antigüedad".to_string(),
            clause_ref: SENIORITY_PREMIUM_CLAUSE.to_string(),
            input: serde_json::json!({
                "cause": cause.code(),
                "years": antiquity.years,
                "total_days": antiquity.total_days
            }),
            output: serde_json::json!({
                "included": false,
                "amount": "0.00"
            }),
            reasoning: decision.reason,
        };

        return Ok(SeniorityPremiumResult {
            concept: None,
            capped_salary,
            audit_step,
        });
    }

    let premium_days = Decimal::from(antiquity.total_days)
        / Decimal::from(Antiquity::DAYS_PER_YEAR)
        * Decimal::from(SENIORITY_DAYS_PER_YEAR);
    let amount = round_money(checked_product(
        SENIORITY_PREMIUM_CONCEPT,
        premium_days,
        capped_salary,
    )?);

    let description = format!(
        "{} días (Topado a {}xSMG: ${}/día) - {}",
        display_amount(premium_days),
        cap.multiplier.normalize(),
        display_amount(capped_salary),
        decision.reason
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "seniority_premium".to_string(),
        rule_name: "Prima de Antigüedad".to_string(),
        clause_ref: SENIORITY_PREMIUM_CLAUSE.to_string(),
        input: serde_json::json!({
            "cause": cause.code(),
            "years": antiquity.years,
            "total_days": antiquity.total_days,
            "daily_salary": daily_salary.normalize().to_string(),
            "salary_ceiling": ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "included": true,
            "premium_days": display_amount(premium_days),
            "capped_salary": capped_salary.normalize().to_string(),
            "cap_applied": cap_applied,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} x {} días/año / 365 x ${} = ${} ({})",
            antiquity.total_days,
            SENIORITY_DAYS_PER_YEAR,
            capped_salary.normalize(),
            amount,
            decision.reason
        ),
    };

    Ok(SeniorityPremiumResult {
        concept: Some(PaymentConcept::new(
            SENIORITY_PREMIUM_CONCEPT,
            amount,
            description,
        )),
        capped_salary,
        audit_step,
    })
}
