//! Social-security (IPS) contributions and retroactive claims.
//!
//! Enrolled workers have their share deducted from the settlement and the
//! employer share is reported for information. A worker the employer never
//! enrolled may claim the employer share for every month worked; that claim
//! is owed to the worker and adds to the gross (Ley 98/92, Art. 74).

use rust_decimal::Decimal;

use crate::models::{AuditStep, SocialSecurity};

/// Article reference for social-security contributions.
pub const SOCIAL_SECURITY_ARTICLE: &str = "Ley 98/92, Art. 74";

/// Contribution rates for a regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionRates {
    /// Worker's share.
    pub worker: Decimal,
    /// Employer's share.
    pub employer: Decimal,
}

/// Returns the rates for the general or domestic regime.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::contribution_rates;
/// use rust_decimal::Decimal;
///
/// let general = contribution_rates(false);
/// assert_eq!(general.worker, Decimal::new(9, 2));
/// assert_eq!(general.employer, Decimal::new(165, 3));
/// ```
pub fn contribution_rates(domestic_regime: bool) -> ContributionRates {
    if domestic_regime {
        ContributionRates {
            worker: Decimal::new(25, 3),
            employer: Decimal::new(55, 3),
        }
    } else {
        ContributionRates {
            worker: Decimal::new(9, 2),
            employer: Decimal::new(165, 3),
        }
    }
}

/// The result of a social-security calculation.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// Contribution block.
    pub contributions: SocialSecurity,
    /// Claim added to gross when the worker was never enrolled.
    pub retroactive_claim: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the social-security block.
///
/// The contribution base is `monthly_wage + overtime_total`; the
/// retroactive claim uses the monthly wage alone over `months_worked`.
pub fn calculate_social_security(
    monthly_wage: Decimal,
    overtime_total: Decimal,
    enrolled: bool,
    domestic_regime: bool,
    months_worked: u32,
    step_number: u32,
) -> SocialSecurityResult {
    let rates = contribution_rates(domestic_regime);
    let base = (monthly_wage + overtime_total).max(Decimal::ZERO);

    let (contributions, retroactive_claim) = if enrolled {
        (
            SocialSecurity {
                enrolled,
                base,
                worker_share: base * rates.worker,
                employer_share: base * rates.employer,
            },
            None,
        )
    } else {
        let claim = monthly_wage * rates.employer * Decimal::from(months_worked);
        (
            SocialSecurity {
                enrolled,
                base,
                worker_share: Decimal::ZERO,
                employer_share: claim,
            },
            Some(claim),
        )
    };

    let regime = if domestic_regime { "domestic" } else { "general" };
    let reasoning = match retroactive_claim {
        None => format!(
            "Enrolled ({} regime): worker share {} of base {} = {} deducted",
            regime,
            rates.worker,
            base.round_dp(2),
            contributions.worker_share.round_dp(2)
        ),
        Some(claim) => format!(
            "Never enrolled ({} regime): employer share {} x {} x {} months = {} claimed",
            regime,
            rates.employer,
            monthly_wage.normalize(),
            months_worked,
            claim.round_dp(2)
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security".to_string(),
        article_ref: SOCIAL_SECURITY_ARTICLE.to_string(),
        input: serde_json::json!({
            "monthly_wage": monthly_wage.normalize().to_string(),
            "overtime_total": overtime_total.round_dp(2).to_string(),
            "enrolled": enrolled,
            "regime": regime,
            "months_worked": months_worked
        }),
        output: serde_json::json!({
            "base": base.round_dp(2).to_string(),
            "worker_share": contributions.worker_share.round_dp(2).to_string(),
            "employer_share": contributions.employer_share.round_dp(2).to_string(),
            "retroactive_claim": retroactive_claim.map(|c| c.round_dp(2).to_string())
        }),
        reasoning,
    };

    SocialSecurityResult {
        contributions,
        retroactive_claim,
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

    /// SS-001: enrolled general regime
    #[test]
    fn test_enrolled_general_regime() {
        let result = calculate_social_security(dec("3000000"), dec("100000"), true, false, 24, 12);
        assert_eq!(result.contributions.base, dec("3100000"));
        assert_eq!(result.contributions.worker_share, dec("279000"));
        assert_eq!(result.contributions.employer_share, dec("511500"));
        assert_eq!(result.retroactive_claim, None);
    }

    #[test]
    fn test_enrolled_domestic_regime() {
        let result = calculate_social_security(dec("2000000"), Decimal::ZERO, true, true, 24, 12);
        assert_eq!(result.contributions.worker_share, dec("50000"));
        assert_eq!(result.contributions.employer_share, dec("110000"));
    }

    /// SS-002: never enrolled, 24 months, general regime
    #[test]
    fn test_never_enrolled_claims_employer_share() {
        let result = calculate_social_security(dec("3000000"), Decimal::ZERO, false, false, 24, 12);
        assert_eq!(result.retroactive_claim, Some(dec("11880000")));
        assert_eq!(result.contributions.worker_share, Decimal::ZERO);
        assert_eq!(result.contributions.employer_share, dec("11880000"));
    }

    #[test]
    fn test_retroactive_claim_ignores_overtime() {
        let result = calculate_social_security(dec("2000000"), dec("500000"), false, true, 10, 12);
        // 2000000 x 0.055 x 10
        assert_eq!(result.retroactive_claim, Some(dec("1100000")));
        assert_eq!(result.contributions.base, dec("2500000"));
    }
}
