//! Pay in lieu of notice (preaviso).
//!
//! Notice days grow with seniority (Art. 87 of the Labor Code):
//!
//! | seniority | days |
//! |---|---|
//! | under 1 year | 30 |
//! | 1 to 5 years | 45 |
//! | 5 to 10 years | 60 |
//! | over 10 years | 90 |

use rust_decimal::Decimal;

use crate::models::{AuditStep, Seniority};

/// Article reference for notice pay.
pub const NOTICE_ARTICLE: &str = "Art. 87";

/// The result of a notice pay calculation.
#[derive(Debug, Clone)]
pub struct NoticeResult {
    /// Notice days for the seniority tier.
    pub days: u32,
    /// `daily_wage * days`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the notice days for a seniority.
///
/// Tiers use whole years only, so 5 years and 11 months is still 45 days.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::notice_days;
/// use severance_engine::models::Seniority;
///
/// let seniority = Seniority { years: 8, months: 0, total_days: 2922, days_since_anniversary: 0 };
/// assert_eq!(notice_days(&seniority), 60);
/// ```
pub fn notice_days(seniority: &Seniority) -> u32 {
    if seniority.years < 1 {
        30
    } else if seniority.years <= 5 {
        45
    } else if seniority.years <= 10 {
        60
    } else {
        90
    }
}

/// Calculates the notice pay for the seniority tier.
pub fn calculate_notice(
    seniority: &Seniority,
    daily_wage: Decimal,
    step_number: u32,
) -> NoticeResult {
    let days = notice_days(seniority);
    let amount = daily_wage * Decimal::from(days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_pay".to_string(),
        rule_name: "Notice Pay".to_string(),
        article_ref: NOTICE_ARTICLE.to_string(),
        input: serde_json::json!({
            "years": seniority.years,
            "months": seniority.months,
            "daily_wage": daily_wage.round_dp(2).to_string()
        }),
        output: serde_json::json!({
            "days": days,
            "amount": amount.round_dp(2).to_string()
        }),
        reasoning: format!(
            "{} years {} months of service: {} notice days x {} = {}",
            seniority.years,
            seniority.months,
            days,
            daily_wage.round_dp(2),
            amount.round_dp(2)
        ),
    };

    NoticeResult {
        days,
        amount,
        audit_step,
    }
}
