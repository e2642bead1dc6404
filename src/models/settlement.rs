//! Settlement result models for the Severance Engine.
//!
//! This module contains the [`TerminationResult`] type and its associated
//! structures that capture all outputs from a severance calculation,
//! including per-concept amounts, itemized settlement lines, totals and the
//! audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ContractType, WorkerType};

/// Which candidate produced the daily wage base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageSource {
    /// Average of the non-zero wages of the last six months.
    SixMonthAverage,
    /// Last contractual monthly wage.
    LastFixedWage,
}

/// Length of service between hire and termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seniority {
    /// Whole years of service.
    pub years: u32,
    /// Whole months beyond the whole years (0..=11).
    pub months: u32,
    /// Exact number of days between the two dates.
    pub total_days: i64,
    /// Days since the last hire-date anniversary.
    pub days_since_anniversary: i64,
}

impl Seniority {
    /// Total whole months of service.
    ///
    /// # Example
    ///
    /// ```
    /// use severance_engine::models::Seniority;
    ///
    /// let seniority = Seniority { years: 2, months: 3, total_days: 822, days_since_anniversary: 91 };
    /// assert_eq!(seniority.total_months(), 27);
    /// ```
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// Overtime and premium amounts by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// Daytime overtime at 150%.
    pub day: Decimal,
    /// Night-time overtime at 200%.
    pub night: Decimal,
    /// Holiday work at 300%.
    pub holiday: Decimal,
    /// Ordinary night hours at 130%.
    pub regular_night: Decimal,
    /// Sum of all categories.
    pub total: Decimal,
}

/// Family allowance outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyAllowance {
    /// Allowance amount (zero when the wage exceeds the cap).
    pub amount: Decimal,
    /// Children counted, capped at five.
    pub children_applied: u32,
}

/// Social-security (IPS) contributions.
///
/// For enrolled workers the worker share is deducted and the employer share
/// is informational. For workers never enrolled the employer share holds the
/// retroactive claim and the worker share is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurity {
    /// Whether the worker was enrolled.
    pub enrolled: bool,
    /// Contribution base (fixed wage plus overtime).
    pub base: Decimal,
    /// Worker's share.
    pub worker_share: Decimal,
    /// Employer's share, or the retroactive claim when never enrolled.
    pub employer_share: Decimal,
}

/// Amounts deducted from the gross settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Half the notice owed by a worker who resigned without notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_notice: Option<Decimal>,
    /// Cash advances and loans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advances: Option<Decimal>,
    /// Worker's social-security share.
    pub social_security: Decimal,
}

/// Kind of legality advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalityWarningKind {
    /// Dismissal of a pregnant worker.
    Pregnancy,
    /// Dismissal of a worker with ten or more years of service.
    #[serde(rename = "stability_10_years")]
    Stability10Years,
}

/// Advisory attached when the dismissal itself may be void.
///
/// It never changes the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityWarning {
    /// The kind of protection involved.
    pub kind: LegalityWarningKind,
    /// Human-readable advisory.
    pub message: String,
}

/// Whether a settlement line adds to or subtracts from the settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Amount owed to the worker.
    Income,
    /// Amount deducted from the worker.
    Deduction,
}

/// The settlement concept a line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    /// Pay in lieu of notice.
    Notice,
    /// Seniority indemnity.
    Indemnity,
    /// Remaining salaries of a fixed-term contract broken early.
    FixedTermIndemnity,
    /// Prorated and owed vacation.
    Vacation,
    /// Proportional aguinaldo.
    Bonus,
    /// Previous year's unpaid aguinaldo.
    PriorYearBonus,
    /// Worked, unpaid days of the final month.
    UnpaidDays,
    /// Pending wages and commissions.
    PendingWages,
    /// Overtime and premiums.
    Overtime,
    /// Family allowance.
    FamilyAllowance,
    /// Retroactive employer social-security claim.
    SocialSecurityClaim,
    /// Penalty for resigning without notice.
    MissingNotice,
    /// Cash advances and loans.
    Advances,
    /// Worker's social-security contribution.
    SocialSecurityContribution,
}

/// A single itemized line of the settlement.
///
/// # Example
///
/// ```
/// use severance_engine::models::{Concept, LineKind, SettlementLine};
/// use rust_decimal::Decimal;
///
/// let line = SettlementLine {
///     kind: LineKind::Income,
///     concept: Concept::Bonus,
///     label: "Aguinaldo".to_string(),
///     amount: Decimal::from(2_000_000),
///     badges: vec![],
///     article_ref: Some("Art. 244".to_string()),
/// };
/// assert_eq!(line.signed_amount(), Decimal::from(2_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    /// Income or deduction.
    pub kind: LineKind,
    /// The concept this line represents.
    pub concept: Concept,
    /// Display label.
    pub label: String,
    /// Unsigned amount.
    pub amount: Decimal,
    /// Short qualifiers shown next to the label (e.g. "Doble").
    #[serde(default)]
    pub badges: Vec<String>,
    /// Reference to the statute article that justifies this line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
}

impl SettlementLine {
    /// Amount with its sign: positive for income, negative for deductions.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            LineKind::Income => self.amount,
            LineKind::Deduction => -self.amount,
        }
    }
}

/// Aggregated totals for a settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTotals {
    /// Sum of every income line.
    pub total_gross: Decimal,
    /// Sum of every deduction line.
    pub total_deductions: Decimal,
    /// `total_gross - total_deductions`.
    pub total_net: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute article for this rule.
    pub article_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a severance calculation.
///
/// Amounts are kept at full decimal precision; rounding to whole guaraníes
/// happens only when a report is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationResult {
    /// Daily wage base used by every day-based concept.
    pub daily_wage: Decimal,
    /// Which candidate produced the daily wage.
    pub daily_wage_source: WageSource,
    /// `daily_wage * 30`.
    pub monthly_wage_equivalent: Decimal,
    /// Service length.
    pub seniority: Seniority,
    /// Contract type after tacit-renewal detection.
    pub effective_contract_type: ContractType,
    /// A fixed-term contract continued past its end date.
    pub tacit_renewal: bool,
    /// Total service was within the probation period.
    pub probation_period: bool,
    /// Statute articles supporting the settlement.
    pub articles: String,

    /// Pay in lieu of notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Decimal>,
    /// Seniority indemnity (after doublings or halving).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indemnity: Option<Decimal>,
    /// Indemnity doubled for stability protection.
    pub indemnity_doubled: bool,
    /// Indemnity doubled for employer closure.
    pub employer_closure: bool,
    /// Maternity stability applied.
    pub maternity_stability: bool,
    /// Caller flagged seniority near the stability threshold.
    pub near_stability: bool,
    /// Indemnity halved for heirs.
    pub death_in_service: bool,
    /// Remaining salaries of an early-terminated fixed-term contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_term_indemnity: Option<Decimal>,
    /// Days left until the fixed-term end date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_term_remaining_days: Option<i64>,
    /// Prorated plus owed vacation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacation: Option<Decimal>,
    /// Prorated vacation paid at double rate.
    pub vacation_doubled: bool,
    /// Proportional aguinaldo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<Decimal>,
    /// Previous year's unpaid aguinaldo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_year_bonus: Option<Decimal>,
    /// Wages for worked, unpaid days of the final month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unpaid_days_wages: Option<Decimal>,
    /// Worker type used for the unpaid-days divisor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    /// Pending wages and commissions.
    pub pending_wages: Decimal,
    /// Overtime and premiums.
    pub overtime: OvertimeBreakdown,
    /// Family allowance.
    pub family_allowance: FamilyAllowance,
    /// Social-security contributions.
    pub social_security: SocialSecurity,
    /// Retroactive employer claim when the worker was never enrolled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_security_retroactive_claim: Option<Decimal>,
    /// Deductions from the gross settlement.
    pub deductions: Deductions,
    /// Advisory when the dismissal itself may be void.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legality_warning: Option<LegalityWarning>,

    /// Itemized income and deduction lines.
    pub lines: Vec<SettlementLine>,
    /// Aggregated totals.
    pub totals: SettlementTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl TerminationResult {
    /// Lines that add to the settlement.
    pub fn income_lines(&self) -> impl Iterator<Item = &SettlementLine> {
        self.lines.iter().filter(|l| l.kind == LineKind::Income)
    }

    /// Lines that subtract from the settlement.
    pub fn deduction_lines(&self) -> impl Iterator<Item = &SettlementLine> {
        self.lines.iter().filter(|l| l.kind == LineKind::Deduction)
    }

    /// Finds the line for a concept, if present.
    pub fn line(&self, concept: Concept) -> Option<&SettlementLine> {
        self.lines.iter().find(|l| l.concept == concept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(kind: LineKind, concept: Concept, amount: &str) -> SettlementLine {
        SettlementLine {
            kind,
            concept,
            label: format!("{:?}", concept),
            amount: dec(amount),
            badges: vec![],
            article_ref: Some("Art. 244".to_string()),
        }
    }

    #[test]
    fn test_signed_amount_negates_deductions() {
        assert_eq!(
            line(LineKind::Income, Concept::Notice, "100").signed_amount(),
            dec("100")
        );
        assert_eq!(
            line(LineKind::Deduction, Concept::Advances, "40").signed_amount(),
            dec("-40")
        );
    }

    /// SR-001: signed line sum equals net
    #[test]
    fn test_signed_line_sum_equals_gross_minus_deductions() {
        let lines = vec![
            line(LineKind::Income, Concept::Notice, "4000000"),
            line(LineKind::Income, Concept::Bonus, "2000000.50"),
            line(LineKind::Deduction, Concept::Advances, "500000"),
            line(LineKind::Deduction, Concept::SocialSecurityContribution, "270000"),
        ];
        let gross: Decimal = lines
            .iter()
            .filter(|l| l.kind == LineKind::Income)
            .map(|l| l.amount)
            .sum();
        let deductions: Decimal = lines
            .iter()
            .filter(|l| l.kind == LineKind::Deduction)
            .map(|l| l.amount)
            .sum();
        let net: Decimal = lines.iter().map(SettlementLine::signed_amount).sum();
        assert_eq!(gross - deductions, net);
        assert_eq!(net, dec("5230000.50"));
    }

    #[test]
    fn test_seniority_total_months() {
        let seniority = Seniority {
            years: 8,
            months: 0,
            total_days: 2922,
            days_since_anniversary: 0,
        };
        assert_eq!(seniority.total_months(), 96);
    }

    #[test]
    fn test_legality_warning_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&LegalityWarningKind::Pregnancy).unwrap(),
            "\"pregnancy\""
        );
        assert_eq!(
            serde_json::to_string(&LegalityWarningKind::Stability10Years).unwrap(),
            "\"stability_10_years\""
        );
    }

    #[test]
    fn test_concept_serialization() {
        assert_eq!(
            serde_json::to_string(&Concept::FixedTermIndemnity).unwrap(),
            "\"fixed_term_indemnity\""
        );
        assert_eq!(
            serde_json::to_string(&Concept::SocialSecurityClaim).unwrap(),
            "\"social_security_claim\""
        );
    }

    #[test]
    fn test_settlement_line_serialization() {
        let mut bonus = line(LineKind::Income, Concept::Bonus, "2000000");
        bonus.badges = vec!["Doble".to_string()];
        let json = serde_json::to_string(&bonus).unwrap();
        assert!(json.contains("\"kind\":\"income\""));
        assert!(json.contains("\"concept\":\"bonus\""));
        assert!(json.contains("\"amount\":\"2000000\""));
        assert!(json.contains("\"badges\":[\"Doble\"]"));
    }

    #[test]
    fn test_deductions_skip_absent_amounts() {
        let deductions = Deductions {
            missing_notice: None,
            advances: Some(dec("150000")),
            social_security: dec("0"),
        };
        let json = serde_json::to_string(&deductions).unwrap();
        assert!(!json.contains("missing_notice"));
        assert!(json.contains("\"advances\":\"150000\""));
    }

    #[test]
    fn test_audit_trace_serialization() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "daily_wage_base".to_string(),
                rule_name: "Daily Wage Base".to_string(),
                article_ref: "Art. 92".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: "Test reasoning".to_string(),
            }],
            warnings: vec![AuditWarning {
                code: "VACATION_PENALTY_NOT_APPLIED".to_string(),
                message: "Test warning".to_string(),
                severity: "low".to_string(),
            }],
        };

        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"steps\":["));
        assert!(json.contains("\"warnings\":["));
        assert!(json.contains("\"article_ref\":\"Art. 92\""));
    }
}
