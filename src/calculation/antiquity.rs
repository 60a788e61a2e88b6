//! Length-of-service calculation.
//!
//! This module parses the start and end dates and derives the [`Antiquity`]
//! (years, partial-year days and total days) used by every other rule.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::{Antiquity, AuditStep};

/// The clause reference for length of service.
pub const ANTIQUITY_CLAUSE: &str = "Art. 158 LFT";

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parses an ISO date (`2024-01-31`) or an RFC 3339 date-time into a UTC timestamp.
///
/// Plain dates map to midnight. `field` names the input in the error.
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.naive_utc());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }

    Err(EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Computes the length of service between two timestamps.
///
/// Elapsed days are the absolute difference rounded up to whole days, then
/// split with a fixed 365-day year. Leap days are not special-cased.
pub fn antiquity_between(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Antiquity> {
    let elapsed_ms = end
        .signed_duration_since(start)
        .num_milliseconds()
        .abs();
    let whole_days = elapsed_ms / MILLIS_PER_DAY;
    let total_days = if elapsed_ms % MILLIS_PER_DAY == 0 {
        whole_days
    } else {
        whole_days + 1
    };

    let total_days = u32::try_from(total_days).map_err(|_| EngineError::CalculationError {
        message: format!("service period of {} days is out of range", total_days),
    })?;

    Ok(Antiquity::from_total_days(total_days))
}

/// Computes the length of service between two date strings.
///
/// The argument order does not matter. Fails with `InvalidDate` when either
/// string is not a calendar date.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::calculate_antiquity;
///
/// let antiquity = calculate_antiquity("2020-01-01", "2024-01-01").unwrap();
/// assert_eq!(antiquity.total_days, 1461);
/// assert_eq!(antiquity.years, 4);
/// assert_eq!(antiquity.days_partial, 1);
///
/// assert!(calculate_antiquity("2020-02-30", "2024-01-01").is_err());
/// ```
pub fn calculate_antiquity(start: &str, end: &str) -> EngineResult<Antiquity> {
    let start = parse_date("start_date", start)?;
    let end = parse_date("end_date", end)?;
    antiquity_between(start, end)
}

/// Builds the audit step recording the antiquity derivation.
pub fn antiquity_audit_step(
    start_date: &str,
    end_date: &str,
    antiquity: &Antiquity,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "antiquity".to_string(),
        rule_name: "Antigüedad".to_string(),
        clause_ref: ANTIQUITY_CLAUSE.to_string(),
        input: serde_json::json!({
            "start_date": start_date,
            "end_date": end_date
        }),
        output: serde_json::json!({
            "years": antiquity.years,
            "days_partial": antiquity.days_partial,
            "total_days": antiquity.total_days
        }),
        reasoning: format!(
            "{} días transcurridos = {} años de 365 días + {} días",
            antiquity.total_days, antiquity.years, antiquity.days_partial
        ),
    }
}
