//! Calculation entry point.
//!
//! [`generate_calculation`] validates the input, derives the length of service,
//! builds the finiquito once and the liquidación for each scenario, and returns
//! the assembled [`CalculationResult`] with its audit trace.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{AuditTrace, AuditWarning, CalculationResult, CalculatorInput};

use super::antiquity::{antiquity_audit_step, antiquity_between, parse_date};
use super::finiquito::build_finiquito;
use super::liquidacion::build_liquidacion;
use super::scenario::{assemble_scenario, scenario_names};

/// Warning code: aguinaldo days below the statutory minimum.
pub const AGUINALDO_BELOW_FLOOR: &str = "AGUINALDO_BELOW_STATUTORY_FLOOR";
/// Warning code: vacation premium percentage below the statutory minimum.
pub const VACATION_PREMIUM_BELOW_FLOOR: &str = "VACATION_PREMIUM_BELOW_STATUTORY_FLOOR";
/// Warning code: end date precedes start date.
pub const END_DATE_BEFORE_START_DATE: &str = "END_DATE_BEFORE_START_DATE";
/// Warning code: back pay given for a cause that carries no indemnity.
pub const LOST_WAGES_IGNORED: &str = "LOST_WAGES_IGNORED";
/// Warning code: a negative numeric input was replaced by zero.
pub const NEGATIVE_INPUT_CLAMPED: &str = "NEGATIVE_INPUT_CLAMPED";

fn clamp_field(field: &str, value: &mut Decimal, warnings: &mut Vec<AuditWarning>) {
    if *value < Decimal::ZERO {
        warnings.push(AuditWarning::new(
            NEGATIVE_INPUT_CLAMPED,
            format!("'{}' was negative ({}); treated as 0", field, value.normalize()),
            "low",
        ));
        *value = Decimal::ZERO;
    }
}

/// Replaces negative numeric fields by zero, recording one warning per field.
fn clamp_negatives(input: &CalculatorInput, warnings: &mut Vec<AuditWarning>) -> CalculatorInput {
    let mut clamped = input.clone();

    clamp_field("pending_worked_days", &mut clamped.pending_worked_days, warnings);
    clamp_field("pending_overtime_hours", &mut clamped.pending_overtime_hours, warnings);
    clamp_field("daily_salary", &mut clamped.daily_salary, warnings);
    clamp_field("integrated_daily_salary", &mut clamped.integrated_daily_salary, warnings);
    clamp_field("base_aguinaldo_days", &mut clamped.base_aguinaldo_days, warnings);
    clamp_field(
        "vacation_premium_percentage",
        &mut clamped.vacation_premium_percentage,
        warnings,
    );
    clamp_field("months_of_lost_wages", &mut clamped.months_of_lost_wages, warnings);

    clamped
}

fn advisory_warnings(
    input: &CalculatorInput,
    config: &EngineConfig,
    warnings: &mut Vec<AuditWarning>,
) {
    let floors = config.benefit_floors();

    if input.base_aguinaldo_days < floors.aguinaldo_days {
        warnings.push(AuditWarning::new(
            AGUINALDO_BELOW_FLOOR,
            format!(
                "Aguinaldo of {} days is below the statutory minimum of {} days",
                input.base_aguinaldo_days.normalize(),
                floors.aguinaldo_days.normalize()
            ),
            "medium",
        ));
    }

    if input.vacation_premium_percentage < floors.vacation_premium_percentage {
        warnings.push(AuditWarning::new(
            VACATION_PREMIUM_BELOW_FLOOR,
            format!(
                "Vacation premium of {}% is below the statutory minimum of {}%",
                input.vacation_premium_percentage.normalize(),
                floors.vacation_premium_percentage.normalize()
            ),
            "medium",
        ));
    }

    if input.months_of_lost_wages > Decimal::ZERO && !input.cause.has_litigation_scenario() {
        warnings.push(AuditWarning::new(
            LOST_WAGES_IGNORED,
            format!(
                "{} months of back pay ignored: cause {} carries no indemnity",
                input.months_of_lost_wages.normalize(),
                input.cause.code()
            ),
            "low",
        ));
    }
}

/// Runs the full settlement calculation.
///
/// The result echoes `input` unchanged. Negative numbers are treated as zero
/// and reported as warnings, as are benefit values below the configured
/// statutory floors. The calculation fails on an unparseable date, or when
/// an amount overflows the `Decimal` range.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::generate_calculation;
/// use finiquito_engine::config::EngineConfig;
/// use finiquito_engine::models::{CalculatorInput, TerminationCause};
/// use rust_decimal::Decimal;
///
/// let input = CalculatorInput {
///     company_name: "Acme".to_string(),
///     worker_name: "Ana".to_string(),
///     start_date: "2020-01-01".to_string(),
///     end_date: "2024-01-01".to_string(),
///     pending_worked_days: Decimal::ZERO,
///     pending_overtime_hours: Decimal::ZERO,
///     daily_salary: Decimal::from(300),
///     integrated_daily_salary: Decimal::from(350),
///     base_aguinaldo_days: Decimal::from(15),
///     vacation_premium_percentage: Decimal::from(25),
///     cause: TerminationCause::Renuncia,
///     months_of_lost_wages: Decimal::ZERO,
/// };
///
/// let result = generate_calculation(&input, &EngineConfig::lft_2015()).unwrap();
/// assert_eq!(result.antiquity.years, 4);
/// assert!(result.scenario_b.is_none());
/// ```
pub fn generate_calculation(
    input: &CalculatorInput,
    config: &EngineConfig,
) -> EngineResult<CalculationResult> {
    let start = parse_date("start_date", &input.start_date)?;
    let end = parse_date("end_date", &input.end_date)?;

    let mut warnings = Vec::new();
    if end < start {
        warnings.push(AuditWarning::new(
            END_DATE_BEFORE_START_DATE,
            format!(
                "End date {} precedes start date {}; the absolute span is used",
                input.end_date, input.start_date
            ),
            "low",
        ));
    }

    let effective = clamp_negatives(input, &mut warnings);
    advisory_warnings(&effective, config, &mut warnings);

    let antiquity = antiquity_between(start, end)?;
    let mut audit_steps = vec![antiquity_audit_step(
        &input.start_date,
        &input.end_date,
        &antiquity,
        1,
    )];

    let finiquito = build_finiquito(&effective, &antiquity, config, 2)?;
    let next_step = 2 + finiquito.audit_steps.len() as u32;
    audit_steps.extend(finiquito.audit_steps);

    let liquidacion = build_liquidacion(&effective, &antiquity, next_step)?;
    audit_steps.extend(liquidacion.audit_steps);

    let (primary_name, maximum_name) = scenario_names(effective.cause);
    let scenario_a = assemble_scenario(
        primary_name,
        finiquito.items.clone(),
        liquidacion.scenario_a,
    )?;
    let scenario_b = match (maximum_name, liquidacion.scenario_b) {
        (Some(name), Some(items)) => Some(assemble_scenario(name, finiquito.items, items)?),
        _ => None,
    };

    for warning in &warnings {
        warn!(code = %warning.code, message = %warning.message, "Calculation warning");
    }
    debug!(
        cause = effective.cause.code(),
        total_days = antiquity.total_days,
        total_a = %scenario_a.total,
        total_b = ?scenario_b.as_ref().map(|s| s.total),
        "Calculation generated"
    );

    Ok(CalculationResult {
        input: input.clone(),
        antiquity,
        scenario_a,
        scenario_b,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
        },
    })
}
