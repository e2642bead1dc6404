//! Termination scenario model and related types.
//!
//! This module defines the [`TerminationInput`] struct that describes one
//! end-of-employment scenario, together with the enumerations for the
//! termination cause, the contract type and the worker type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The legal cause of the termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationCause {
    /// Dismissal by the employer without just cause.
    UnjustifiedDismissal,
    /// Dismissal by the employer with just cause.
    JustifiedDismissal,
    /// Resignation by the worker with just cause (equivalent to unjustified dismissal).
    JustifiedResignation,
    /// Voluntary resignation by the worker.
    VoluntaryResignation,
    /// Termination by mutual agreement.
    MutualAgreement,
    /// The worker abandoned the job.
    WorkAbandonment,
    /// The worker died in service; heirs receive the settlement.
    DeathInService,
    /// Natural completion of a fixed-term contract.
    FixedTermCompletion,
}

impl TerminationCause {
    /// Returns the snake_case identifier used in JSON and audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationCause::UnjustifiedDismissal => "unjustified_dismissal",
            TerminationCause::JustifiedDismissal => "justified_dismissal",
            TerminationCause::JustifiedResignation => "justified_resignation",
            TerminationCause::VoluntaryResignation => "voluntary_resignation",
            TerminationCause::MutualAgreement => "mutual_agreement",
            TerminationCause::WorkAbandonment => "work_abandonment",
            TerminationCause::DeathInService => "death_in_service",
            TerminationCause::FixedTermCompletion => "fixed_term_completion",
        }
    }
}

/// The contract arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Open-ended contract.
    #[default]
    Indefinite,
    /// Contract with an agreed end date.
    FixedTerm,
}

/// How the worker's wage is expressed, which changes the daily divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerType {
    /// Monthly salaried worker (30-day divisor).
    #[default]
    Salaried,
    /// Daily-rate worker (26-day divisor).
    Daily,
}

impl WorkerType {
    /// Number of days the monthly wage is divided by to get a day's pay.
    pub fn daily_divisor(&self) -> Decimal {
        match self {
            WorkerType::Salaried => Decimal::from(30),
            WorkerType::Daily => Decimal::from(26),
        }
    }
}

/// Overtime and premium hours worked and still unpaid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeHours {
    /// Daytime overtime hours.
    pub day: Decimal,
    /// Night-time overtime hours.
    pub night: Decimal,
    /// Hours worked on public holidays.
    pub holiday: Decimal,
    /// Ordinary (non-overtime) night hours attracting the night premium.
    pub regular_night: Decimal,
}

/// Identifying data printed on settlement reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerDetails {
    /// Worker's full name.
    pub name: Option<String>,
    /// Position held.
    pub role: Option<String>,
    /// Employer name.
    pub employer: Option<String>,
}

/// A complete termination scenario.
///
/// All monetary and day-count fields must be non-negative; the engine
/// rejects the whole input otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationInput {
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// Legal cause of the termination.
    pub cause: TerminationCause,
    /// Contract arrangement as signed.
    #[serde(default)]
    pub contract_type: ContractType,
    /// Agreed end date, required for fixed-term contracts.
    #[serde(default)]
    pub contract_end_date: Option<NaiveDate>,
    /// Up to six most recent monthly wages; zero entries are ignored.
    #[serde(default)]
    pub last_6_months_wages: Vec<Decimal>,
    /// Most recent contractual monthly wage.
    pub last_fixed_monthly_wage: Decimal,
    /// Monthly remunerations of the bonus year.
    #[serde(default)]
    pub annual_remunerations: Vec<Decimal>,
    /// Wages and commissions still owed.
    #[serde(default)]
    pub pending_wages: Decimal,
    /// Previous year's aguinaldo never paid.
    #[serde(default)]
    pub prior_year_bonus_owed: Decimal,
    /// Days worked in the final month and not yet paid.
    #[serde(default)]
    pub unpaid_days_final_month: Decimal,
    /// Salaried or daily-rate worker.
    #[serde(default)]
    pub worker_type: WorkerType,
    /// Overtime and premium hours.
    #[serde(default)]
    pub overtime: OvertimeHours,
    /// Number of dependent children.
    #[serde(default)]
    pub dependent_children: u32,
    /// Vacation days owed from previous cycles.
    #[serde(default)]
    pub prior_vacation_days_owed: Decimal,
    /// A full previous vacation period was accrued and never taken.
    #[serde(default)]
    pub accrued_unused_vacation: bool,
    /// The employer closed down.
    #[serde(default)]
    pub employer_closure: bool,
    /// Seniority is close to the ten-year stability threshold.
    #[serde(default)]
    pub near_stability: bool,
    /// The worker is protected by maternity stability.
    #[serde(default)]
    pub maternity_stability: bool,
    /// The worker is under the domestic social-security regime.
    #[serde(default)]
    pub domestic_regime: bool,
    /// The worker was enrolled in social security (IPS).
    #[serde(default = "default_true")]
    pub social_security_enrolled: bool,
    /// Cash advances and loans to deduct.
    #[serde(default)]
    pub advances: Decimal,
    /// A resigning worker gave the statutory notice.
    #[serde(default = "default_true")]
    pub gave_notice: bool,
    /// Pay prorated vacation at double rate.
    #[serde(default)]
    pub apply_vacation_penalty: bool,
    /// Minimum legal monthly wage in force.
    pub minimum_wage: Decimal,
    /// Optional worker identification for reports.
    #[serde(default)]
    pub worker: Option<WorkerDetails>,
}

fn default_true() -> bool {
    true
}

impl TerminationInput {
    /// Creates a scenario with every ancillary amount at zero and every flag
    /// at its default.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::models::{TerminationCause, TerminationInput};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let input = TerminationInput::new(
    ///     NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    ///     TerminationCause::UnjustifiedDismissal,
    ///     Decimal::from(2_000_000),
    ///     Decimal::from(2_798_309),
    /// );
    /// assert!(input.social_security_enrolled);
    /// assert!(input.last_6_months_wages.is_empty());
    /// ```
    pub fn new(
        hire_date: NaiveDate,
        termination_date: NaiveDate,
        cause: TerminationCause,
        last_fixed_monthly_wage: Decimal,
        minimum_wage: Decimal,
    ) -> Self {
        Self {
            hire_date,
            termination_date,
            cause,
            contract_type: ContractType::Indefinite,
            contract_end_date: None,
            last_6_months_wages: Vec::new(),
            last_fixed_monthly_wage,
            annual_remunerations: Vec::new(),
            pending_wages: Decimal::ZERO,
            prior_year_bonus_owed: Decimal::ZERO,
            unpaid_days_final_month: Decimal::ZERO,
            worker_type: WorkerType::Salaried,
            overtime: OvertimeHours::default(),
            dependent_children: 0,
            prior_vacation_days_owed: Decimal::ZERO,
            accrued_unused_vacation: false,
            employer_closure: false,
            near_stability: false,
            maternity_stability: false,
            domestic_regime: false,
            social_security_enrolled: true,
            advances: Decimal::ZERO,
            gave_notice: true,
            apply_vacation_penalty: false,
            minimum_wage,
            worker: None,
        }
    }

    /// Returns true if the cause is an unjustified dismissal.
    pub fn is_unjustified_dismissal(&self) -> bool {
        self.cause == TerminationCause::UnjustifiedDismissal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_minimal_input_applies_defaults() {
        let json = r#"{
            "hire_date": "2020-03-01",
            "termination_date": "2024-03-15",
            "cause": "unjustified_dismissal",
            "last_fixed_monthly_wage": "3000000",
            "minimum_wage": "2798309"
        }"#;

        let input: TerminationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.cause, TerminationCause::UnjustifiedDismissal);
        assert_eq!(input.contract_type, ContractType::Indefinite);
        assert_eq!(input.worker_type, WorkerType::Salaried);
        assert_eq!(input.last_fixed_monthly_wage, dec("3000000"));
        assert!(input.social_security_enrolled);
        assert!(input.gave_notice);
        assert!(!input.apply_vacation_penalty);
        assert_eq!(input.overtime, OvertimeHours::default());
        assert!(input.worker.is_none());
    }

    #[test]
    fn test_deserialize_fixed_term_with_overtime() {
        let json = r#"{
            "hire_date": "2023-07-01",
            "termination_date": "2024-01-01",
            "cause": "unjustified_dismissal",
            "contract_type": "fixed_term",
            "contract_end_date": "2024-06-30",
            "last_6_months_wages": ["2500000", "2500000", "0"],
            "last_fixed_monthly_wage": "2500000",
            "worker_type": "daily",
            "overtime": { "day": "4", "holiday": "2.5" },
            "social_security_enrolled": false,
            "minimum_wage": "2798309",
            "worker": { "name": "Ana Benítez", "employer": "Comercial SA" }
        }"#;

        let input: TerminationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.contract_type, ContractType::FixedTerm);
        assert_eq!(
            input.contract_end_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        );
        assert_eq!(input.last_6_months_wages.len(), 3);
        assert_eq!(input.worker_type, WorkerType::Daily);
        assert_eq!(input.overtime.day, dec("4"));
        assert_eq!(input.overtime.night, Decimal::ZERO);
        assert_eq!(input.overtime.holiday, dec("2.5"));
        assert!(!input.social_security_enrolled);
        let worker = input.worker.unwrap();
        assert_eq!(worker.name.as_deref(), Some("Ana Benítez"));
        assert!(worker.role.is_none());
    }

    #[test]
    fn test_cause_serialization() {
        assert_eq!(
            serde_json::to_string(&TerminationCause::DeathInService).unwrap(),
            "\"death_in_service\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationCause::FixedTermCompletion).unwrap(),
            "\"fixed_term_completion\""
        );
    }

    #[test]
    fn test_cause_as_str_matches_serde_name() {
        let causes = [
            TerminationCause::UnjustifiedDismissal,
            TerminationCause::JustifiedDismissal,
            TerminationCause::JustifiedResignation,
            TerminationCause::VoluntaryResignation,
            TerminationCause::MutualAgreement,
            TerminationCause::WorkAbandonment,
            TerminationCause::DeathInService,
            TerminationCause::FixedTermCompletion,
        ];
        for cause in causes {
            let json = serde_json::to_string(&cause).unwrap();
            assert_eq!(json, format!("\"{}\"", cause.as_str()));
        }
    }

    #[test]
    fn test_worker_type_divisors() {
        assert_eq!(WorkerType::Salaried.daily_divisor(), dec("30"));
        assert_eq!(WorkerType::Daily.daily_divisor(), dec("26"));
    }

    #[test]
    fn test_new_sets_neutral_defaults() {
        let input = TerminationInput::new(
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            TerminationCause::UnjustifiedDismissal,
            dec("2000000"),
            dec("2798309"),
        );
        assert!(input.is_unjustified_dismissal());
        assert_eq!(input.advances, Decimal::ZERO);
        assert_eq!(input.dependent_children, 0);
        assert!(!input.employer_closure);
    }
}
