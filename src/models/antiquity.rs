//! Length-of-service model.

use serde::{Deserialize, Serialize};

/// Length of service derived from the start and end dates.
///
/// Uses a fixed 365-day year, so `total_days == years * 365 + days_partial`.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::Antiquity;
///
/// let antiquity = Antiquity::from_total_days(1461);
/// assert_eq!(antiquity.years, 4);
/// assert_eq!(antiquity.days_partial, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Antiquity {
    /// Whole 365-day years completed.
    pub years: u32,
    /// Days elapsed in the current, incomplete year.
    pub days_partial: u32,
    /// Total elapsed days.
    pub total_days: u32,
}

impl Antiquity {
    /// Number of days in the fixed service year.
    pub const DAYS_PER_YEAR: u32 = 365;

    /// Splits a day count into whole years and a remainder.
    pub fn from_total_days(total_days: u32) -> Self {
        Self {
            years: total_days / Self::DAYS_PER_YEAR,
            days_partial: total_days % Self::DAYS_PER_YEAR,
            total_days,
        }
    }
}
