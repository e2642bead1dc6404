//! Worker-side deductions other than social security.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Seniority, TerminationCause, TerminationInput};

use super::notice::notice_days;

/// Article reference for the missing-notice penalty.
pub const MISSING_NOTICE_ARTICLE: &str = "Art. 90";

/// The result of the deductions calculation.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// Half the notice a resigning worker failed to give.
    pub missing_notice: Option<Decimal>,
    /// Advances and loans, when positive.
    pub advances: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the missing-notice penalty and the advances deduction.
///
/// The penalty applies to a voluntary resignation without notice and is
/// half the notice pay the worker's seniority tier would have required.
pub fn calculate_deductions(
    input: &TerminationInput,
    seniority: &Seniority,
    daily_wage: Decimal,
    step_number: u32,
) -> DeductionsResult {
    let missing_notice = (input.cause == TerminationCause::VoluntaryResignation
        && !input.gave_notice)
        .then(|| daily_wage * Decimal::from(notice_days(seniority)) * Decimal::new(5, 1));

    let advances = (input.advances > Decimal::ZERO).then_some(input.advances);

    let audit_step = AuditStep {
        step_number,
        rule_id: "deductions".to_string(),
        rule_name: "Deductions".to_string(),
        article_ref: MISSING_NOTICE_ARTICLE.to_string(),
        input: serde_json::json!({
            "cause": input.cause.as_str(),
            "gave_notice": input.gave_notice,
            "advances": input.advances.normalize().to_string()
        }),
        output: serde_json::json!({
            "missing_notice": missing_notice.map(|m| m.round_dp(2).to_string()),
            "advances": advances.map(|a| a.normalize().to_string())
        }),
        reasoning: match missing_notice {
            Some(penalty) => format!(
                "Resigned without notice: 50% of {} notice days = {}",
                notice_days(seniority),
                penalty.round_dp(2)
            ),
            None => "No missing-notice penalty".to_string(),
        },
    };

    DeductionsResult {
        missing_notice,
        advances,
        audit_step,
    }
}
