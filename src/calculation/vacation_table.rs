//! Statutory vacation-days table (Art. 76 LFT, pre-2023 schedule).

/// The clause reference for the vacation table.
pub const VACATION_TABLE_CLAUSE: &str = "Art. 76 LFT";

/// Returns the paid vacation days per year for the given completed years of service.
///
/// Years 1–4 grant 6, 8, 10 and 12 days. From year 5 the entitlement is 14 days
/// and grows by 2 for every further block of 5 years. Less than one year is
/// treated as the first-year base of 6.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::legal_vacation_days;
///
/// assert_eq!(legal_vacation_days(0), 6);
/// assert_eq!(legal_vacation_days(4), 12);
/// assert_eq!(legal_vacation_days(5), 14);
/// assert_eq!(legal_vacation_days(10), 16);
/// ```
pub fn legal_vacation_days(years_completed: u32) -> u32 {
    match years_completed {
        0 | 1 => 6,
        2 => 8,
        3 => 10,
        4 => 12,
        years => 14 + 2 * ((years - 5) / 5),
    }
}
