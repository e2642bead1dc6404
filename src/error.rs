//! Error types for the Severance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating a termination
//! scenario, loading statutory configuration or computing due dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Severance Engine.
///
/// Validation errors are raised before any computation starts, so a caller
/// never receives a partially computed settlement.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::MissingContractEndDate;
/// assert_eq!(
///     error.to_string(),
///     "Fixed-term contract requires a contract end date"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The termination date precedes the hire date.
    #[error("Termination date {termination_date} is before hire date {hire_date}")]
    InvalidDateRange {
        /// The hire date supplied.
        hire_date: NaiveDate,
        /// The termination date supplied.
        termination_date: NaiveDate,
    },

    /// A fixed-term contract was supplied without its end date.
    #[error("Fixed-term contract requires a contract end date")]
    MissingContractEndDate,

    /// A monetary, hour or day-count field was negative or above its limit.
    #[error("Invalid numeric input '{field}': {value} is negative or exceeds the accepted limit")]
    InvalidNumericInput {
        /// The offending field.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A field was structurally invalid (e.g. too many wage entries).
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// Duration text carried no parseable amount.
    #[error("Duration text '{text}' does not contain a number")]
    DegenerateDurationText {
        /// The rejected text.
        text: String,
    },

    /// Duration amount exceeds the allowed maximum.
    #[error("Duration amount {amount} exceeds the maximum of {max}")]
    DurationOutOfRange {
        /// The parsed amount.
        amount: u32,
        /// The configured maximum.
        max: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No minimum wage is configured for the given date.
    #[error("Minimum wage not found for date {date}")]
    MinimumWageNotFound {
        /// The date for which the minimum wage was requested.
        date: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
