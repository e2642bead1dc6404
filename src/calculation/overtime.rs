//! Overtime and premium pay.
//!
//! The hourly base is the last fixed monthly wage over 30 days of 8 hours.
//! Each category of hours is paid at its own multiplier (Arts. 234 and 235).

use rust_decimal::Decimal;

use crate::models::{AuditStep, OvertimeBreakdown, OvertimeHours};

/// Article reference for overtime pay.
pub const OVERTIME_ARTICLE: &str = "Arts. 234, 235";

/// Multiplier for daytime overtime.
pub fn day_overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

/// Multiplier for night-time overtime.
pub fn night_overtime_multiplier() -> Decimal {
    Decimal::from(2)
}

/// Multiplier for work on public holidays.
pub fn holiday_multiplier() -> Decimal {
    Decimal::from(3)
}

/// Multiplier for ordinary night hours.
pub fn regular_night_multiplier() -> Decimal {
    Decimal::new(13, 1)
}

/// The result of an overtime calculation.
#[derive(Debug, Clone)]
pub struct OvertimeResult {
    /// Hourly base the multipliers apply to.
    pub hourly_base: Decimal,
    /// Amounts per category.
    pub breakdown: OvertimeBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Hourly base from a monthly wage; zero when the wage is zero.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::hourly_base;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hourly_base(Decimal::from(2_400_000)), Decimal::from(10_000));
/// ```
pub fn hourly_base(monthly_wage: Decimal) -> Decimal {
    if monthly_wage > Decimal::ZERO {
        monthly_wage / Decimal::from(30) / Decimal::from(8)
    } else {
        Decimal::ZERO
    }
}

/// Calculates overtime and premium pay from the hour counts.
pub fn calculate_overtime(
    monthly_wage: Decimal,
    hours: &OvertimeHours,
    step_number: u32,
) -> OvertimeResult {
    let base = hourly_base(monthly_wage);

    let day = base * day_overtime_multiplier() * hours.day;
    let night = base * night_overtime_multiplier() * hours.night;
    let holiday = base * holiday_multiplier() * hours.holiday;
    let regular_night = base * regular_night_multiplier() * hours.regular_night;
    let total = day + night + holiday + regular_night;

    let breakdown = OvertimeBreakdown {
        day,
        night,
        holiday,
        regular_night,
        total,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime".to_string(),
        rule_name: "Overtime and Premiums".to_string(),
        article_ref: OVERTIME_ARTICLE.to_string(),
        input: serde_json::json!({
            "monthly_wage": monthly_wage.normalize().to_string(),
            "day_hours": hours.day.normalize().to_string(),
            "night_hours": hours.night.normalize().to_string(),
            "holiday_hours": hours.holiday.normalize().to_string(),
            "regular_night_hours": hours.regular_night.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_base": base.round_dp(2).to_string(),
            "day": day.round_dp(2).to_string(),
            "night": night.round_dp(2).to_string(),
            "holiday": holiday.round_dp(2).to_string(),
            "regular_night": regular_night.round_dp(2).to_string(),
            "total": total.round_dp(2).to_string()
        }),
        reasoning: format!(
            "Hourly base {}: day x1.5, night x2.0, holiday x3.0, regular night x1.3 = {}",
            base.round_dp(2),
            total.round_dp(2)
        ),
    };

    OvertimeResult {
        hourly_base: base,
        breakdown,
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

    /// OT-001: each category at its multiplier
    #[test]
    fn test_each_category_at_its_multiplier() {
        let hours = OvertimeHours {
            day: dec("10"),
            night: dec("4"),
            holiday: dec("8"),
            regular_night: dec("20"),
        };
        let result = calculate_overtime(dec("2400000"), &hours, 9);
        assert_eq!(result.hourly_base, dec("10000"));
        assert_eq!(result.breakdown.day, dec("150000"));
        assert_eq!(result.breakdown.night, dec("80000"));
        assert_eq!(result.breakdown.holiday, dec("240000"));
        assert_eq!(result.breakdown.regular_night, dec("260000"));
        assert_eq!(result.breakdown.total, dec("730000"));
    }

    #[test]
    fn test_zero_wage_gives_zero_base() {
        let hours = OvertimeHours {
            day: dec("10"),
            ..Default::default()
        };
        let result = calculate_overtime(Decimal::ZERO, &hours, 9);
        assert_eq!(result.hourly_base, Decimal::ZERO);
        assert_eq!(result.breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_no_hours_gives_zero_total() {
        let result = calculate_overtime(dec("3000000"), &OvertimeHours::default(), 9);
        assert_eq!(result.breakdown, OvertimeBreakdown::default());
    }

    #[test]
    fn test_fractional_hours() {
        let hours = OvertimeHours {
            holiday: dec("2.5"),
            ..Default::default()
        };
        let result = calculate_overtime(dec("2400000"), &hours, 9);
        assert_eq!(result.breakdown.holiday, dec("75000"));
    }
}
