//! Calculation logic for the finiquito engine.
//!
//! This module contains all the functions for determining a settlement:
//! length of service, the statutory vacation table, money rounding, the
//! finiquito concepts, the seniority premium decision, the liquidación
//! indemnities, scenario assembly and the [`generate_calculation`] entry point.

mod antiquity;
mod engine;
mod finiquito;
mod liquidacion;
mod money;
mod scenario;
mod seniority_premium;
mod termination_rules;
mod vacation_table;

pub use antiquity::{
    ANTIQUITY_CLAUSE, antiquity_audit_step, antiquity_between, calculate_antiquity, parse_date,
};
pub use engine::{
    AGUINALDO_BELOW_FLOOR, END_DATE_BEFORE_START_DATE, LOST_WAGES_IGNORED,
    NEGATIVE_INPUT_CLAMPED, VACATION_PREMIUM_BELOW_FLOOR, generate_calculation,
};
pub use finiquito::{
    AGUINALDO_CLAUSE, ConceptResult, FiniquitoResult, HOURS_PER_WORKDAY, OVERTIME_CLAUSE,
    OVERTIME_MULTIPLIER, PENDING_DAYS_CLAUSE, VACATION_PREMIUM_CLAUSE, VacationResult,
    build_finiquito, calculate_aguinaldo, calculate_overtime, calculate_pending_days,
    calculate_proportional_vacation, calculate_vacation_premium,
};
pub use liquidacion::{
    CONSTITUTIONAL_INDEMNITY_CLAUSE, CONSTITUTIONAL_INDEMNITY_DAYS, DAYS_PER_MONTH,
    INDEMNITY_DAYS_PER_YEAR, LiquidacionResult, TWENTY_DAYS_CLAUSE, build_liquidacion,
    calculate_constitutional_indemnity, calculate_lost_wages, calculate_twenty_days_per_year,
};
pub use money::{
    checked_product, checked_sum, display_amount, fixed_2, float_percentage, round_money,
};
pub use scenario::{
    CONCILIATION_SCENARIO_NAME, LITIGATION_SCENARIO_NAME, SINGLE_SCENARIO_NAME,
    assemble_scenario, scenario_names, subtotal,
};
pub use seniority_premium::{
    SENIORITY_DAYS_PER_YEAR, SENIORITY_PREMIUM_CLAUSE, SENIORITY_PREMIUM_CONCEPT,
    SeniorityPremiumDecision, SeniorityPremiumResult, calculate_seniority_premium,
    decide_seniority_premium,
};
pub use termination_rules::{
    CauseRules, IndemnityRule, RESIGNATION_SENIORITY_MIN_YEARS, SeniorityPremiumRule, rules_for,
};
pub use vacation_table::{VACATION_TABLE_CLAUSE, legal_vacation_days};
