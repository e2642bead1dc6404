//! Core data models for the Severance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod deadline;
mod holiday;
mod settlement;
mod termination;

pub use deadline::{DeadlineTemplate, DurationKind, NO_DURATION_TEXT};
pub use holiday::{Holiday, HolidayCalendar};
pub use settlement::{
    AuditStep, AuditTrace, AuditWarning, Concept, Deductions, FamilyAllowance, LegalityWarning,
    LegalityWarningKind, LineKind, OvertimeBreakdown, Seniority, SettlementLine, SettlementTotals,
    SocialSecurity, TerminationResult, WageSource,
};
pub use termination::{
    ContractType, OvertimeHours, TerminationCause, TerminationInput, WorkerDetails, WorkerType,
};
