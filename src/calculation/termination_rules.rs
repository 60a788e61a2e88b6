//! Decision table mapping each termination cause to the rules it triggers.
//!
//! All cause-dependent branching in the engine goes through [`rules_for`], so
//! the legal mapping can be read (and tested) in one place:
//!
//! | Cause                   | Prima de antigüedad | Indemnizaciones          |
//! |-------------------------|---------------------|--------------------------|
//! | `Renuncia`              | only with 15+ years | none                     |
//! | `DespidoJustificado`    | always              | none                     |
//! | `DespidoInjustificado`  | always              | constitutional (A and B) |

use crate::models::TerminationCause;

/// Minimum years of service for a resigning worker to earn the seniority
/// premium (Art. 162 fr. III LFT).
pub const RESIGNATION_SENIORITY_MIN_YEARS: u32 = 15;

/// When the seniority premium is owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeniorityPremiumRule {
    /// Owed regardless of length of service.
    Always,
    /// Owed only after the given number of completed years.
    MinimumYears(u32),
}

/// Which indemnities (liquidación) are owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndemnityRule {
    /// No indemnity; the settlement is the finiquito alone.
    None,
    /// Constitutional indemnity plus back pay, with a litigation-maximum
    /// scenario that adds the 20-days-per-year indemnity.
    Constitutional,
}

/// The rules triggered by a termination cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CauseRules {
    /// Seniority premium eligibility.
    pub seniority_premium: SeniorityPremiumRule,
    /// Indemnities owed.
    pub indemnity: IndemnityRule,
}

/// Looks up the rules for a termination cause.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::{rules_for, IndemnityRule, SeniorityPremiumRule};
/// use finiquito_engine::models::TerminationCause;
///
/// let rules = rules_for(TerminationCause::Renuncia);
/// assert_eq!(rules.seniority_premium, SeniorityPremiumRule::MinimumYears(15));
/// assert_eq!(rules.indemnity, IndemnityRule::None);
/// ```
pub const fn rules_for(cause: TerminationCause) -> CauseRules {
    match cause {
        TerminationCause::Renuncia => CauseRules {
            seniority_premium: SeniorityPremiumRule::MinimumYears(RESIGNATION_SENIORITY_MIN_YEARS),
            indemnity: IndemnityRule::None,
        },
        TerminationCause::DespidoJustificado => CauseRules {
            seniority_premium: SeniorityPremiumRule::Always,
            indemnity: IndemnityRule::None,
        },
        TerminationCause::DespidoInjustificado => CauseRules {
            seniority_premium: SeniorityPremiumRule::Always,
            indemnity: IndemnityRule::Constitutional,
        },
    }
}

impl TerminationCause {
    /// The rules triggered by this cause.
    pub const fn rules(self) -> CauseRules {
        rules_for(self)
    }

    /// Whether this cause yields a litigation-maximum scenario.
    pub fn has_litigation_scenario(self) -> bool {
        matches!(self.rules().indemnity, IndemnityRule::Constitutional)
    }
}
