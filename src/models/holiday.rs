//! Public holiday and holiday calendar models.
//!
//! This module contains the [`Holiday`] record as stored by the surrounding
//! application and the [`HolidayCalendar`] set consumed by the due-date
//! calculator.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A public holiday entry.
///
/// Recurring holidays repeat every year on the same month and day; the
/// year of `date` is then only informative.
///
/// # Example
///
/// ```
/// use severance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2020, 5, 15).unwrap(),
///     name: "Día de la Independencia".to_string(),
///     recurring: true,
/// };
/// assert_eq!(
///     holiday.date_in_year(2026),
///     NaiveDate::from_ymd_opt(2026, 5, 15)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Whether the holiday repeats every year.
    #[serde(default)]
    pub recurring: bool,
}

impl Holiday {
    /// Returns the date this holiday falls on in `year`, if any.
    ///
    /// Non-recurring holidays only exist in their own year. A recurring
    /// 29 February has no date in non-leap years.
    pub fn date_in_year(&self, year: i32) -> Option<NaiveDate> {
        if self.recurring {
            self.date.with_year(year)
        } else if self.date.year() == year {
            Some(self.date)
        } else {
            None
        }
    }
}

/// A set of non-working dates.
///
/// Membership is exact year/month/day equality.
///
/// # Example
///
/// ```
/// use severance_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::from_dates([
///     NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
/// ]);
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2027, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar from concrete dates.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Expands holiday records over an inclusive range of years.
    ///
    /// Recurring entries are projected onto every year of the range;
    /// one-off entries are kept only when their year is inside it.
    pub fn from_holidays(holidays: &[Holiday], first_year: i32, last_year: i32) -> Self {
        let dates = (first_year..=last_year)
            .flat_map(|year| holidays.iter().filter_map(move |h| h.date_in_year(year)))
            .collect();
        Self { dates }
    }

    /// Checks if a given date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Adds a date to the calendar.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Number of dates in the calendar.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the calendar holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}
