//! Prorated vacation calculation.
//!
//! Entitlement days depend on seniority (Arts. 218 and 224 of the Labor
//! Code) and are prorated over a 360-day year from the last hire-date
//! anniversary. Vacation days owed from previous cycles are paid on top at
//! the daily wage.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Seniority};

/// Article reference for vacation pay.
pub const VACATION_ARTICLE: &str = "Arts. 218, 224";

/// Day count of the proration year.
pub const PRORATION_YEAR_DAYS: u32 = 360;

/// The result of a vacation calculation.
#[derive(Debug, Clone)]
pub struct VacationResult {
    /// Entitlement days for the seniority tier.
    pub entitlement_days: u32,
    /// Prorated entitlement, after doubling when requested.
    pub prorated: Decimal,
    /// Owed days from previous cycles at the daily wage.
    pub prior_owed: Decimal,
    /// `prorated + prior_owed`.
    pub amount: Decimal,
    /// The prorated part was doubled.
    pub doubled: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the vacation entitlement days for a seniority.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::vacation_entitlement_days;
/// use severance_engine::models::Seniority;
///
/// let seniority = Seniority { years: 8, months: 0, total_days: 2922, days_since_anniversary: 0 };
/// assert_eq!(vacation_entitlement_days(&seniority), 18);
/// ```
pub fn vacation_entitlement_days(seniority: &Seniority) -> u32 {
    if seniority.years < 5 {
        12
    } else if seniority.years <= 10 {
        18
    } else {
        30
    }
}

/// Calculates prorated vacation plus vacation owed from earlier cycles.
///
/// Only the prorated part is doubled, and only when `apply_penalty` is set.
pub fn calculate_vacation(
    seniority: &Seniority,
    daily_wage: Decimal,
    prior_days_owed: Decimal,
    apply_penalty: bool,
    step_number: u32,
) -> VacationResult {
    let entitlement_days = vacation_entitlement_days(seniority);

    let single = Decimal::from(seniority.days_since_anniversary)
        / Decimal::from(PRORATION_YEAR_DAYS)
        * Decimal::from(entitlement_days)
        * daily_wage;
    let prorated = if apply_penalty {
        single * Decimal::from(2)
    } else {
        single
    };
    let prior_owed = prior_days_owed * daily_wage;
    let amount = prorated + prior_owed;

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation".to_string(),
        rule_name: "Prorated Vacation".to_string(),
        article_ref: VACATION_ARTICLE.to_string(),
        input: serde_json::json!({
            "years": seniority.years,
            "days_since_anniversary": seniority.days_since_anniversary,
            "daily_wage": daily_wage.round_dp(2).to_string(),
            "prior_days_owed": prior_days_owed.normalize().to_string(),
            "apply_penalty": apply_penalty
        }),
        output: serde_json::json!({
            "entitlement_days": entitlement_days,
            "prorated": prorated.round_dp(2).to_string(),
            "prior_owed": prior_owed.round_dp(2).to_string(),
            "amount": amount.round_dp(2).to_string(),
            "doubled": apply_penalty
        }),
        reasoning: format!(
            "{}/{} x {} days x {}{} + {} owed days = {}",
            seniority.days_since_anniversary,
            PRORATION_YEAR_DAYS,
            entitlement_days,
            daily_wage.round_dp(2),
            if apply_penalty { " x 2" } else { "" },
            prior_days_owed.normalize(),
            amount.round_dp(2)
        ),
    };

    VacationResult {
        entitlement_days,
        prorated,
        prior_owed,
        amount,
        doubled: apply_penalty,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn seniority(years: u32, days_since_anniversary: i64) -> Seniority {
        Seniority {
            years,
            months: 0,
            total_days: i64::from(years) * 365 + days_since_anniversary,
            days_since_anniversary,
        }
    }

    /// VC-001: entitlement tiers
    #[test]
    fn test_entitlement_tiers() {
        assert_eq!(vacation_entitlement_days(&seniority(0, 100)), 12);
        assert_eq!(vacation_entitlement_days(&seniority(4, 0)), 12);
        assert_eq!(vacation_entitlement_days(&seniority(5, 0)), 18);
        assert_eq!(vacation_entitlement_days(&seniority(10, 0)), 18);
        assert_eq!(vacation_entitlement_days(&seniority(11, 0)), 30);
    }

    /// VC-002: proration over 360 days
    #[test]
    fn test_prorated_by_days_since_anniversary() {
        let result = calculate_vacation(&seniority(2, 180), dec("100000"), Decimal::ZERO, false, 6);
        // 180/360 x 12 x 100000
        assert_eq!(result.amount, dec("600000"));
        assert!(!result.doubled);
    }

    #[test]
    fn test_anniversary_day_prorates_to_zero() {
        let result = calculate_vacation(&seniority(8, 0), dec("66666.67"), Decimal::ZERO, false, 6);
        assert_eq!(result.entitlement_days, 18);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    /// VC-003: penalty doubles only the prorated part
    #[test]
    fn test_penalty_doubles_prorated_part_only() {
        let result = calculate_vacation(&seniority(6, 90), dec("100000"), dec("3"), true, 6);
        // 90/360 x 18 x 100000 = 450000, doubled 900000
        assert_eq!(result.prorated, dec("900000"));
        assert_eq!(result.prior_owed, dec("300000"));
        assert_eq!(result.amount, dec("1200000"));
        assert!(result.doubled);
    }

    #[test]
    fn test_prior_days_owed_added_at_daily_wage() {
        let result = calculate_vacation(&seniority(12, 36), dec("100000"), dec("5"), false, 6);
        // 36/360 x 30 x 100000 = 300000
        assert_eq!(result.prorated, dec("300000"));
        assert_eq!(result.amount, dec("800000"));
    }
}
