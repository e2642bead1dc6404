//! Configuration types for the statutory reference data.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DEFAULT_MAX_DURATION_AMOUNT;
use crate::models::Holiday;

/// Default probation period, in days of service.
pub const DEFAULT_PROBATION_DAYS: i64 = 60;

/// Metadata about the statute the engine implements.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// Short code of the statute (e.g., "PY-CT").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or law number.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

/// Limits applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineLimits {
    /// Services up to this many days are within the probation period.
    pub probation_days: i64,
    /// Largest duration amount accepted from callers.
    pub max_duration_amount: u32,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            probation_days: DEFAULT_PROBATION_DAYS,
            max_duration_amount: DEFAULT_MAX_DURATION_AMOUNT,
        }
    }
}

/// Structure of statute.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteConfig {
    /// Statute metadata.
    pub statute: StatuteMetadata,
    /// Engine limits; defaults apply when omitted.
    #[serde(default)]
    pub limits: EngineLimits,
}

/// A minimum wage in force from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimumWageConfig {
    /// The date this minimum wage takes effect.
    pub effective_date: NaiveDate,
    /// Monthly minimum wage in guaraníes.
    pub monthly: Decimal,
    /// Decree or resolution that set it.
    #[serde(default)]
    pub decree: Option<String>,
}

/// Structure of holidays.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// National holidays, recurring or year-specific.
    pub holidays: Vec<Holiday>,
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SeveranceConfig {
    statute: StatuteConfig,
    /// Sorted oldest first.
    minimum_wages: Vec<MinimumWageConfig>,
    holidays: Vec<Holiday>,
}

impl SeveranceConfig {
    /// Creates a new configuration from its component parts.
    pub fn new(
        statute: StatuteConfig,
        minimum_wages: Vec<MinimumWageConfig>,
        holidays: Vec<Holiday>,
    ) -> Self {
        let mut sorted_wages = minimum_wages;
        sorted_wages.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            statute,
            minimum_wages: sorted_wages,
            holidays,
        }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.statute.statute
    }

    /// Returns the engine limits.
    pub fn limits(&self) -> &EngineLimits {
        &self.statute.limits
    }

    /// Returns all minimum wage entries, oldest first.
    pub fn minimum_wages(&self) -> &[MinimumWageConfig] {
        &self.minimum_wages
    }

    /// Returns all holiday entries.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}
