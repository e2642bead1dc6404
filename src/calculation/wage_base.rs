//! Daily wage base determination.
//!
//! The daily wage used for notice, indemnity and vacation is the one most
//! favorable to the worker between the six-month average and the last fixed
//! monthly wage (Art. 92 of the Labor Code).

use rust_decimal::Decimal;

use crate::models::{AuditStep, WageSource};

/// Article reference for the wage base rule.
pub const WAGE_BASE_ARTICLE: &str = "Art. 92";

/// The result of the daily wage determination.
#[derive(Debug, Clone)]
pub struct WageBaseResult {
    /// Daily wage base.
    pub daily_wage: Decimal,
    /// `daily_wage * 30`.
    pub monthly_wage_equivalent: Decimal,
    /// Which candidate won.
    pub source: WageSource,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Daily wage from the average of the non-zero wages; zero when none.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::six_month_average_daily_wage;
/// use rust_decimal::Decimal;
///
/// let wages = [Decimal::from(3_000_000), Decimal::ZERO, Decimal::from(3_600_000)];
/// assert_eq!(six_month_average_daily_wage(&wages), Decimal::from(110_000));
/// ```
pub fn six_month_average_daily_wage(wages: &[Decimal]) -> Decimal {
    let valid: Vec<Decimal> = wages.iter().copied().filter(|w| *w > Decimal::ZERO).collect();
    if valid.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = valid.iter().sum();
    sum / Decimal::from(valid.len()) / Decimal::from(30)
}

/// Determines the daily wage base.
///
/// Both candidates are always computed; the larger one wins and ties go to
/// the six-month average.
pub fn determine_daily_wage(
    last_6_months_wages: &[Decimal],
    last_fixed_monthly_wage: Decimal,
    step_number: u32,
) -> WageBaseResult {
    let average_candidate = six_month_average_daily_wage(last_6_months_wages);
    let fixed_candidate = last_fixed_monthly_wage / Decimal::from(30);

    let (daily_wage, source) = if fixed_candidate > average_candidate {
        (fixed_candidate, WageSource::LastFixedWage)
    } else {
        (average_candidate, WageSource::SixMonthAverage)
    };
    let monthly_wage_equivalent = daily_wage * Decimal::from(30);

    let source_str = match source {
        WageSource::SixMonthAverage => "six_month_average",
        WageSource::LastFixedWage => "last_fixed_wage",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_wage_base".to_string(),
        rule_name: "Daily Wage Base".to_string(),
        article_ref: WAGE_BASE_ARTICLE.to_string(),
        input: serde_json::json!({
            "last_6_months_wages": last_6_months_wages
                .iter()
                .map(|w| w.normalize().to_string())
                .collect::<Vec<_>>(),
            "last_fixed_monthly_wage": last_fixed_monthly_wage.normalize().to_string()
        }),
        output: serde_json::json!({
            "average_candidate": average_candidate.round_dp(2).to_string(),
            "fixed_candidate": fixed_candidate.round_dp(2).to_string(),
            "daily_wage": daily_wage.round_dp(2).to_string(),
            "source": source_str
        }),
        reasoning: format!(
            "Most favorable daily wage: six-month average {} vs last fixed wage {}, using {}",
            average_candidate.round_dp(2),
            fixed_candidate.round_dp(2),
            source_str
        ),
    };

    WageBaseResult {
        daily_wage,
        monthly_wage_equivalent,
        source,
        audit_step,
    }
}
