//! Request types for the Severance Engine API.
//!
//! This module defines the JSON request structures for the `/settlement`,
//! `/settlement/report` and `/due-date` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    ContractType, DeadlineTemplate, DurationKind, OvertimeHours, TerminationCause,
    TerminationInput, WorkerDetails, WorkerType,
};

/// Request body for the `/settlement` and `/settlement/report` endpoints.
///
/// Mirrors [`TerminationInput`], except that the minimum wage may be
/// omitted; the configured minimum wage in force on the termination date is
/// used then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// Legal cause of the termination.
    pub cause: TerminationCause,
    /// Contract arrangement as signed.
    #[serde(default)]
    pub contract_type: ContractType,
    /// Agreed end date for fixed-term contracts.
    #[serde(default)]
    pub contract_end_date: Option<NaiveDate>,
    /// Up to six most recent monthly wages.
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
    /// A full previous vacation period was never taken.
    #[serde(default)]
    pub accrued_unused_vacation: bool,
    /// The employer closed down.
    #[serde(default)]
    pub employer_closure: bool,
    /// Seniority is close to the ten-year threshold.
    #[serde(default)]
    pub near_stability: bool,
    /// The worker is protected by maternity stability.
    #[serde(default)]
    pub maternity_stability: bool,
    /// Domestic social-security regime.
    #[serde(default)]
    pub domestic_regime: bool,
    /// The worker was enrolled in social security.
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
    /// Minimum wage override; resolved from configuration when absent.
    #[serde(default)]
    pub minimum_wage: Option<Decimal>,
    /// Worker identification for reports.
    #[serde(default)]
    pub worker: Option<WorkerDetails>,
}

fn default_true() -> bool {
    true
}

impl SettlementRequest {
    /// Converts the request into a termination scenario using
    /// `minimum_wage` when the request carries none.
    pub fn into_input(self, minimum_wage: Decimal) -> TerminationInput {
        TerminationInput {
            hire_date: self.hire_date,
            termination_date: self.termination_date,
            cause: self.cause,
            contract_type: self.contract_type,
            contract_end_date: self.contract_end_date,
            last_6_months_wages: self.last_6_months_wages,
            last_fixed_monthly_wage: self.last_fixed_monthly_wage,
            annual_remunerations: self.annual_remunerations,
            pending_wages: self.pending_wages,
            prior_year_bonus_owed: self.prior_year_bonus_owed,
            unpaid_days_final_month: self.unpaid_days_final_month,
            worker_type: self.worker_type,
            overtime: self.overtime,
            dependent_children: self.dependent_children,
            prior_vacation_days_owed: self.prior_vacation_days_owed,
            accrued_unused_vacation: self.accrued_unused_vacation,
            employer_closure: self.employer_closure,
            near_stability: self.near_stability,
            maternity_stability: self.maternity_stability,
            domestic_regime: self.domestic_regime,
            social_security_enrolled: self.social_security_enrolled,
            advances: self.advances,
            gave_notice: self.gave_notice,
            apply_vacation_penalty: self.apply_vacation_penalty,
            minimum_wage: self.minimum_wage.unwrap_or(minimum_wage),
            worker: self.worker,
        }
    }
}

/// Request body for the `/due-date` endpoint.
///
/// The duration comes from `duration_text` when present, otherwise from
/// the rendered `template`. The kind comes from `kind`, then from the
/// template, and defaults to business days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueDateRequest {
    /// Instant the deadline starts counting from.
    pub start: NaiveDateTime,
    /// Free-text duration, e.g. "10 días hábiles".
    #[serde(default)]
    pub duration_text: Option<String>,
    /// Stored deadline template.
    #[serde(default)]
    pub template: Option<DeadlineTemplate>,
    /// Business or calendar days.
    #[serde(default)]
    pub kind: Option<DurationKind>,
    /// Holiday dates overriding the configured calendar.
    #[serde(default)]
    pub holidays: Option<Vec<NaiveDate>>,
}

impl DueDateRequest {
    /// The duration text to parse, if any.
    pub fn resolved_duration_text(&self) -> Option<String> {
        self.duration_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .or_else(|| self.template.as_ref().map(DeadlineTemplate::render_duration))
    }

    /// The duration kind to apply.
    pub fn resolved_kind(&self) -> DurationKind {
        self.kind
            .or_else(|| self.template.as_ref().map(DeadlineTemplate::duration_kind))
            .unwrap_or_default()
    }
}
