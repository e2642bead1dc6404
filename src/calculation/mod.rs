//! Calculation logic for the Severance Engine.
//!
//! This module contains the settlement calculators (seniority, daily wage
//! base, cause eligibility, notice pay, indemnity, vacation, aguinaldo,
//! overtime, family allowance, social security and deductions), the
//! settlement orchestrator that combines them, the printable report and the
//! business-day due-date calculator.

mod bonus;
mod concepts;
mod deductions;
mod due_date;
mod family_allowance;
mod indemnity;
mod notice;
mod overtime;
mod report;
mod seniority;
mod settlement;
mod social_security;
mod vacation;
mod validation;
mod wage_base;

pub use bonus::{BONUS_ARTICLE, BonusResult, calculate_bonus};
pub use concepts::{ConceptEligibility, FIXED_TERM_BREACH_ARTICLES, concept_eligibility};
pub use deductions::{DeductionsResult, MISSING_NOTICE_ARTICLE, calculate_deductions};
pub use due_date::{
    DEFAULT_MAX_DURATION_AMOUNT, DurationSpec, DurationUnit, advance_business_date,
    advance_due_date, apply_duration, is_business_day, normalize_duration_text,
};
pub use family_allowance::{
    FAMILY_ALLOWANCE_ARTICLE, FamilyAllowanceResult, MAX_CHILDREN, calculate_family_allowance,
};
pub use indemnity::{
    DAYS_PER_PERIOD, INDEMNITY_ARTICLE, IndemnityBranch, IndemnityMultiplier, IndemnityResult,
    MultiplierReason, STABILITY_YEARS, applicable_multipliers, apply_multipliers, base_indemnity,
    calculate_indemnity, indemnity_periods,
};
pub use notice::{NOTICE_ARTICLE, NoticeResult, calculate_notice, notice_days};
pub use overtime::{
    OVERTIME_ARTICLE, OvertimeResult, calculate_overtime, day_overtime_multiplier,
    holiday_multiplier, hourly_base, night_overtime_multiplier, regular_night_multiplier,
};
pub use report::{SettlementReport, cause_label, contract_label, format_guaranies, render_report};
pub use seniority::calculate_seniority;
pub use settlement::{
    NEAR_STABILITY, PREGNANCY_WARNING, STABILITY_WARNING, VACATION_PENALTY_NOT_APPLIED,
    assess_legality, calculate_settlement, calculate_settlement_with_limits, calculate_totals,
    detect_tacit_renewal,
};
pub use social_security::{
    ContributionRates, SOCIAL_SECURITY_ARTICLE, SocialSecurityResult, calculate_social_security,
    contribution_rates,
};
pub use vacation::{
    PRORATION_YEAR_DAYS, VACATION_ARTICLE, VacationResult, calculate_vacation,
    vacation_entitlement_days,
};
pub use validation::{
    MAX_AMOUNT, MAX_ANNUAL_REMUNERATIONS, MAX_QUANTITY, MAX_WAGE_HISTORY, validate_input,
};
pub use wage_base::{
    WAGE_BASE_ARTICLE, WageBaseResult, determine_daily_wage, six_month_average_daily_wage,
};
