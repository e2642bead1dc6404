//! Indemnity calculation.
//!
//! Three mutually exclusive branches:
//!
//! - death in service: half the full seniority indemnity, paid to heirs
//!   (Art. 79);
//! - early breach of a fixed-term contract by unjustified dismissal: the
//!   remaining days of the term at the daily wage (Art. 229);
//! - everything else under an indefinite contract: 15 daily wages per year
//!   of service or fraction over six months (Art. 91), multiplied by every
//!   applicable doubling.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ContractType, Seniority, TerminationCause, TerminationInput};

/// Article reference for the seniority indemnity.
pub const INDEMNITY_ARTICLE: &str = "Art. 91";

/// Daily wages owed per indemnity period.
pub const DAYS_PER_PERIOD: u32 = 15;

/// Seniority at which special stability applies.
pub const STABILITY_YEARS: u32 = 10;

/// Why a doubling applies to the indemnity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierReason {
    /// Ten-year or maternity stability with unjustified dismissal.
    StabilityProtection,
    /// The employer closed down.
    EmployerClosure,
}

/// A single factor applied to the base indemnity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndemnityMultiplier {
    /// The condition that triggered it.
    pub reason: MultiplierReason,
    /// The factor.
    pub factor: Decimal,
}

/// Which indemnity branch produced the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndemnityBranch {
    /// Half indemnity for heirs.
    DeathInService,
    /// Remaining salaries of a fixed-term contract.
    FixedTermBreach,
    /// Ordinary seniority indemnity.
    Seniority,
    /// No branch produced an amount.
    NotApplicable,
}

/// The result of an indemnity calculation.
#[derive(Debug, Clone)]
pub struct IndemnityResult {
    /// The branch taken.
    pub branch: IndemnityBranch,
    /// The indemnity before multipliers (or halving).
    pub base: Decimal,
    /// The multipliers applied, in order.
    pub multipliers: Vec<IndemnityMultiplier>,
    /// The final amount.
    pub amount: Decimal,
    /// Days left in the fixed term, for the fixed-term branch.
    pub remaining_days: Option<i64>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl IndemnityResult {
    /// Returns true if a multiplier for `reason` was applied.
    pub fn has_multiplier(&self, reason: MultiplierReason) -> bool {
        self.multipliers.iter().any(|m| m.reason == reason)
    }
}

/// Number of indemnity periods: whole years plus one when the remaining
/// months reach six.
pub fn indemnity_periods(seniority: &Seniority) -> u32 {
    seniority.years + u32::from(seniority.months >= 6)
}

/// Full seniority indemnity before any multiplier.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::base_indemnity;
/// use severance_engine::models::Seniority;
/// use rust_decimal::Decimal;
///
/// let seniority = Seniority { years: 3, months: 7, total_days: 1310, days_since_anniversary: 215 };
/// // 15 days x 4 periods
/// assert_eq!(base_indemnity(&seniority, Decimal::from(100_000)), Decimal::from(6_000_000));
/// ```
pub fn base_indemnity(seniority: &Seniority, daily_wage: Decimal) -> Decimal {
    daily_wage * Decimal::from(DAYS_PER_PERIOD) * Decimal::from(indemnity_periods(seniority))
}

/// Lists the doublings that apply to a seniority indemnity.
///
/// Stability protection and employer closure are independent and stack.
pub fn applicable_multipliers(
    input: &TerminationInput,
    seniority: &Seniority,
) -> Vec<IndemnityMultiplier> {
    let two = Decimal::from(2);
    let mut multipliers = Vec::new();

    let unjustified = input.is_unjustified_dismissal();
    let ten_year_stability = seniority.years >= STABILITY_YEARS;
    if unjustified && (ten_year_stability || input.maternity_stability) {
        multipliers.push(IndemnityMultiplier {
            reason: MultiplierReason::StabilityProtection,
            factor: two,
        });
    }

    if input.employer_closure {
        multipliers.push(IndemnityMultiplier {
            reason: MultiplierReason::EmployerClosure,
            factor: two,
        });
    }

    multipliers
}

/// Folds the multipliers over `base`.
pub fn apply_multipliers(base: Decimal, multipliers: &[IndemnityMultiplier]) -> Decimal {
    multipliers.iter().fold(base, |acc, m| acc * m.factor)
}

/// Calculates the indemnity for an eligible, non-probation termination.
///
/// `effective_contract_type` is the contract type after tacit-renewal
/// detection.
pub fn calculate_indemnity(
    input: &TerminationInput,
    seniority: &Seniority,
    daily_wage: Decimal,
    effective_contract_type: ContractType,
    step_number: u32,
) -> IndemnityResult {
    let (branch, base, multipliers, amount, remaining_days) = if input.cause
        == TerminationCause::DeathInService
    {
        let base = base_indemnity(seniority, daily_wage);
        let amount = base * Decimal::new(5, 1);
        (IndemnityBranch::DeathInService, base, Vec::new(), amount, None)
    } else if effective_contract_type == ContractType::FixedTerm {
        fixed_term_branch(input, daily_wage)
    } else {
        let base = base_indemnity(seniority, daily_wage);
        let multipliers = applicable_multipliers(input, seniority);
        let amount = apply_multipliers(base, &multipliers);
        (IndemnityBranch::Seniority, base, multipliers, amount, None)
    };

    let branch_str = match branch {
        IndemnityBranch::DeathInService => "death_in_service",
        IndemnityBranch::FixedTermBreach => "fixed_term_breach",
        IndemnityBranch::Seniority => "seniority",
        IndemnityBranch::NotApplicable => "not_applicable",
    };

    let article_ref = match branch {
        IndemnityBranch::DeathInService => "Art. 79",
        IndemnityBranch::FixedTermBreach => "Art. 229",
        IndemnityBranch::Seniority | IndemnityBranch::NotApplicable => INDEMNITY_ARTICLE,
    };

    let factors: Vec<String> = multipliers.iter().map(|m| format!("x{}", m.factor)).collect();
    let reasoning = match branch {
        IndemnityBranch::DeathInService => format!(
            "Death in service: half of full indemnity {} = {}",
            base.round_dp(2),
            amount.round_dp(2)
        ),
        IndemnityBranch::FixedTermBreach => format!(
            "Fixed-term contract broken early: {} remaining days x {} = {}",
            remaining_days.unwrap_or_default(),
            daily_wage.round_dp(2),
            amount.round_dp(2)
        ),
        IndemnityBranch::Seniority => format!(
            "{} periods x {} days x {} = {}{}",
            indemnity_periods(seniority),
            DAYS_PER_PERIOD,
            daily_wage.round_dp(2),
            base.round_dp(2),
            if factors.is_empty() {
                String::new()
            } else {
                format!(", {} = {}", factors.join(" "), amount.round_dp(2))
            }
        ),
        IndemnityBranch::NotApplicable => {
            "Fixed-term contract with no remaining days: no indemnity".to_string()
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "indemnity".to_string(),
        rule_name: "Indemnity".to_string(),
        article_ref: article_ref.to_string(),
        input: serde_json::json!({
            "cause": input.cause.as_str(),
            "years": seniority.years,
            "months": seniority.months,
            "daily_wage": daily_wage.round_dp(2).to_string(),
            "maternity_stability": input.maternity_stability,
            "employer_closure": input.employer_closure
        }),
        output: serde_json::json!({
            "branch": branch_str,
            "base": base.round_dp(2).to_string(),
            "multipliers": multipliers,
            "amount": amount.round_dp(2).to_string(),
            "remaining_days": remaining_days
        }),
        reasoning,
    };

    IndemnityResult {
        branch,
        base,
        multipliers,
        amount,
        remaining_days,
        audit_step,
    }
}

fn fixed_term_branch(
    input: &TerminationInput,
    daily_wage: Decimal,
) -> (
    IndemnityBranch,
    Decimal,
    Vec<IndemnityMultiplier>,
    Decimal,
    Option<i64>,
) {
    let remaining = if input.is_unjustified_dismissal() {
        input
            .contract_end_date
            .map(|end| remaining_days(input.termination_date, end))
            .filter(|days| *days > 0)
    } else {
        None
    };

    match remaining {
        Some(days) => {
            let amount = daily_wage * Decimal::from(days);
            (
                IndemnityBranch::FixedTermBreach,
                amount,
                Vec::new(),
                amount,
                Some(days),
            )
        }
        None => (
            IndemnityBranch::NotApplicable,
            Decimal::ZERO,
            Vec::new(),
            Decimal::ZERO,
            None,
        ),
    }
}

fn remaining_days(termination_date: NaiveDate, contract_end_date: NaiveDate) -> i64 {
    (contract_end_date - termination_date).num_days()
}
