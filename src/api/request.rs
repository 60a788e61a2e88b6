//! Request types for the finiquito engine API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/export/csv` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BenefitFloors;
use crate::models::{CalculatorInput, TerminationCause};

/// Request body for the `/calculate` and `/export/csv` endpoints.
///
/// Only the dates and the cause are required. Identity fields default to an
/// empty string and amounts to zero; the benefit bases default to the
/// configured statutory floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employer's name.
    #[serde(default)]
    pub company_name: String,
    /// The worker's name.
    #[serde(default)]
    pub worker_name: String,
    /// The hire date (`YYYY-MM-DD`).
    pub start_date: String,
    /// The termination date (`YYYY-MM-DD`).
    pub end_date: String,
    /// Worked days not yet paid.
    #[serde(default)]
    pub pending_worked_days: Decimal,
    /// Overtime hours not yet paid.
    #[serde(default)]
    pub pending_overtime_hours: Decimal,
    /// Nominal daily salary.
    #[serde(default)]
    pub daily_salary: Decimal,
    /// Integrated daily salary (SDI).
    #[serde(default)]
    pub integrated_daily_salary: Decimal,
    /// Aguinaldo days per year; the statutory floor when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_aguinaldo_days: Option<Decimal>,
    /// Vacation premium percentage; the statutory floor when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacation_premium_percentage: Option<Decimal>,
    /// Why the employment ended.
    pub cause: TerminationCause,
    /// Estimated months of back pay.
    #[serde(default)]
    pub months_of_lost_wages: Decimal,
}

impl CalculationRequest {
    /// Converts the request into engine input, filling omitted benefit bases
    /// from `floors`.
    pub fn into_input(self, floors: &BenefitFloors) -> CalculatorInput {
        CalculatorInput {
            company_name: self.company_name,
            worker_name: self.worker_name,
            start_date: self.start_date,
            end_date: self.end_date,
            pending_worked_days: self.pending_worked_days,
            pending_overtime_hours: self.pending_overtime_hours,
            daily_salary: self.daily_salary,
            integrated_daily_salary: self.integrated_daily_salary,
            base_aguinaldo_days: self.base_aguinaldo_days.unwrap_or(floors.aguinaldo_days),
            vacation_premium_percentage: self
                .vacation_premium_percentage
                .unwrap_or(floors.vacation_premium_percentage),
            cause: self.cause,
            months_of_lost_wages: self.months_of_lost_wages,
        }
    }
}

impl From<CalculatorInput> for CalculationRequest {
    fn from(input: CalculatorInput) -> Self {
        CalculationRequest {
            company_name: input.company_name,
            worker_name: input.worker_name,
            start_date: input.start_date,
            end_date: input.end_date,
            pending_worked_days: input.pending_worked_days,
            pending_overtime_hours: input.pending_overtime_hours,
            daily_salary: input.daily_salary,
            integrated_daily_salary: input.integrated_daily_salary,
            base_aguinaldo_days: Some(input.base_aguinaldo_days),
            vacation_premium_percentage: Some(input.vacation_premium_percentage),
            cause: input.cause,
            months_of_lost_wages: input.months_of_lost_wages,
        }
    }
}
