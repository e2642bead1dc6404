//! Proportional aguinaldo (thirteenth-month bonus).

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Article reference for the aguinaldo.
pub const BONUS_ARTICLE: &str = "Art. 244";

/// The result of a bonus calculation.
#[derive(Debug, Clone)]
pub struct BonusResult {
    /// One twelfth of the remunerations earned in the bonus year.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the proportional aguinaldo as `sum(remunerations) / 12`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_bonus;
/// use rust_decimal::Decimal;
///
/// let result = calculate_bonus(&[Decimal::from(3_000_000); 4], 1);
/// assert_eq!(result.amount, Decimal::from(1_000_000));
/// ```
pub fn calculate_bonus(annual_remunerations: &[Decimal], step_number: u32) -> BonusResult {
    let sum: Decimal = annual_remunerations.iter().sum();
    let amount = sum / Decimal::from(12);

    let audit_step = AuditStep {
        step_number,
        rule_id: "bonus".to_string(),
        rule_name: "Proportional Aguinaldo".to_string(),
        article_ref: BONUS_ARTICLE.to_string(),
        input: serde_json::json!({
            "months": annual_remunerations.len(),
            "sum": sum.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.round_dp(2).to_string()
        }),
        reasoning: format!(
            "{} remunerations totalling {} / 12 = {}",
            annual_remunerations.len(),
            sum.normalize(),
            amount.round_dp(2)
        ),
    };

    BonusResult { amount, audit_step }
}
