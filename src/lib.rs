//! Severance Engine for Paraguayan labor law
//!
//! This crate calculates end-of-employment settlements (liquidación laboral)
//! under the Paraguayan Labor Code: notice pay, seniority indemnity with its
//! doublings, prorated vacation, aguinaldo, overtime, family allowance,
//! social-security contributions and deductions, with a full audit trace.
//! It also computes procedural due dates over business or calendar days.
//!
//! # Example
//!
//! ```
//! use severance_engine::calculation::calculate_settlement;
//! use severance_engine::models::{TerminationCause, TerminationInput};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let mut input = TerminationInput::new(
//!     NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!     TerminationCause::UnjustifiedDismissal,
//!     Decimal::from(3_000_000),
//!     Decimal::from(2_680_373),
//! );
//! input.last_6_months_wages = vec![Decimal::from(3_000_000); 6];
//!
//! let result = calculate_settlement(&input).unwrap();
//! assert_eq!(result.seniority.years, 8);
//! assert!(result.totals.total_net > Decimal::ZERO);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
