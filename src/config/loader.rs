//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! reference data from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::types::{
    EngineLimits, HolidaysConfig, MinimumWageConfig, SeveranceConfig, StatuteConfig,
    StatuteMetadata,
};

/// Loads and provides access to the statutory reference data.
///
/// # Directory Structure
///
/// ```text
/// config/py/
/// ├── statute.yaml        # Statute metadata and engine limits
/// ├── holidays.yaml       # National holidays
/// └── minimum_wages/
///     └── 2025-07-01.yaml # Minimum wage effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/py").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let minimum_wage = loader.minimum_wage_on(date).unwrap();
/// println!("Minimum wage: {} Gs.", minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SeveranceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML or lacks a required field, or if no minimum wage file exists.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use severance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/py")?;
    /// # Ok::<(), severance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statute = Self::load_yaml::<StatuteConfig>(&path.join("statute.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;
        let minimum_wages = Self::load_minimum_wages(&path.join("minimum_wages"))?;

        let config = SeveranceConfig::new(statute, minimum_wages, holidays.holidays);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all minimum wage files from the directory.
    fn load_minimum_wages(dir: &Path) -> EngineResult<Vec<MinimumWageConfig>> {
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut wages = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                wages.push(Self::load_yaml::<MinimumWageConfig>(&path)?);
            }
        }

        if wages.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no minimum wage files found)", dir_str),
            });
        }

        Ok(wages)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SeveranceConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.config.statute()
    }

    /// Returns the engine limits.
    pub fn limits(&self) -> &EngineLimits {
        self.config.limits()
    }

    /// Gets the monthly minimum wage in force on `date`.
    ///
    /// Picks the most recent entry effective on or before the date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use severance_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/py")?;
    /// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    /// let wage = loader.minimum_wage_on(date)?;
    /// println!("Minimum wage: {} Gs.", wage);
    /// # Ok::<(), severance_engine::error::EngineError>(())
    /// ```
    pub fn minimum_wage_on(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.config
            .minimum_wages()
            .iter()
            .rev()
            .find(|w| w.effective_date <= date)
            .map(|w| w.monthly)
            .ok_or(EngineError::MinimumWageNotFound { date })
    }

    /// Expands the configured holidays over an inclusive range of years.
    ///
    /// Recurring holidays appear in every year of the range; one-off
    /// holidays only in their own year.
    pub fn holiday_calendar(&self, first_year: i32, last_year: i32) -> HolidayCalendar {
        HolidayCalendar::from_holidays(self.config.holidays(), first_year, last_year)
    }
}
