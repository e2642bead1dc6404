//! Family allowance (bonificación familiar).
//!
//! Workers earning up to twice the minimum wage receive 5% of the minimum
//! wage per dependent child, for at most five children (Art. 253).

use rust_decimal::Decimal;

use crate::models::{AuditStep, FamilyAllowance};

/// Article reference for the family allowance.
pub const FAMILY_ALLOWANCE_ARTICLE: &str = "Art. 253";

/// Most children counted for the allowance.
pub const MAX_CHILDREN: u32 = 5;

/// The result of a family allowance calculation.
#[derive(Debug, Clone)]
pub struct FamilyAllowanceResult {
    /// Allowance amount and children applied.
    pub allowance: FamilyAllowance,
    /// The wage was within the cap.
    pub within_cap: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the family allowance.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_family_allowance;
/// use rust_decimal::Decimal;
///
/// let result = calculate_family_allowance(Decimal::from(3_000_000), Decimal::from(2_000_000), 2, 1);
/// assert_eq!(result.allowance.amount, Decimal::from(200_000));
/// ```
pub fn calculate_family_allowance(
    monthly_wage: Decimal,
    minimum_wage: Decimal,
    children: u32,
    step_number: u32,
) -> FamilyAllowanceResult {
    let children_applied = children.min(MAX_CHILDREN);
    let within_cap = monthly_wage <= minimum_wage * Decimal::from(2);
    let amount = if within_cap {
        Decimal::from(children_applied) * (minimum_wage * Decimal::new(5, 2))
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "family_allowance".to_string(),
        rule_name: "Family Allowance".to_string(),
        article_ref: FAMILY_ALLOWANCE_ARTICLE.to_string(),
        input: serde_json::json!({
            "monthly_wage": monthly_wage.normalize().to_string(),
            "minimum_wage": minimum_wage.normalize().to_string(),
            "children": children
        }),
        output: serde_json::json!({
            "within_cap": within_cap,
            "children_applied": children_applied,
            "amount": amount.round_dp(2).to_string()
        }),
        reasoning: if within_cap {
            format!(
                "{} children x 5% of minimum wage {} = {}",
                children_applied,
                minimum_wage.normalize(),
                amount.round_dp(2)
            )
        } else {
            format!(
                "Wage {} exceeds twice the minimum wage: no allowance",
                monthly_wage.normalize()
            )
        },
    };

    FamilyAllowanceResult {
        allowance: FamilyAllowance {
            amount,
            children_applied,
        },
        within_cap,
        audit_step,
    }
}
