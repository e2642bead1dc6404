//! Seniority and date arithmetic.
//!
//! Converts a hire/termination date pair into whole years, whole months,
//! the exact day count and the days elapsed since the last hire-date
//! anniversary.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::Seniority;

/// Computes the seniority between `hire_date` and `termination_date`.
///
/// Whole months are counted by calendar month addition, clipping to the end
/// of shorter months, and whole years are derived from the same count so
/// `years * 12 + months` is always the whole-month total. A year completes
/// on the hire-date anniversary, which for a 29 February hire date is 1
/// March in common years; the same anniversary anchors
/// `days_since_anniversary`.
///
/// # Errors
///
/// Returns `InvalidDateRange` if `termination_date` is before `hire_date`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_seniority;
/// use chrono::NaiveDate;
///
/// let seniority = calculate_seniority(
///     NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(seniority.years, 8);
/// assert_eq!(seniority.months, 0);
/// assert_eq!(seniority.days_since_anniversary, 0);
/// ```
pub fn calculate_seniority(
    hire_date: NaiveDate,
    termination_date: NaiveDate,
) -> EngineResult<Seniority> {
    if termination_date < hire_date {
        return Err(EngineError::InvalidDateRange {
            hire_date,
            termination_date,
        });
    }

    let mut whole_months = whole_months_between(hire_date, termination_date)?;
    let years = whole_months / 12;
    if years > 0 {
        let year = hire_date.year() + years as i32;
        let anniversary = anniversary_in(hire_date, year).ok_or_else(|| {
            EngineError::CalculationError {
                message: format!("no anniversary of {} in {}", hire_date, year),
            }
        })?;
        // Month clipping reaches 28 February before the anniversary does.
        if anniversary > termination_date {
            whole_months -= 1;
        }
    }
    let total_days = (termination_date - hire_date).num_days();
    let last_anniversary = last_anniversary_on_or_before(hire_date, termination_date)?;

    Ok(Seniority {
        years: whole_months / 12,
        months: whole_months % 12,
        total_days,
        days_since_anniversary: (termination_date - last_anniversary).num_days(),
    })
}

/// Counts the whole calendar months from `from` to `to` (`from <= to`).
pub(crate) fn whole_months_between(from: NaiveDate, to: NaiveDate) -> EngineResult<u32> {
    let raw = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if raw <= 0 {
        return Ok(0);
    }

    let raw = raw as u32;
    let candidate = from
        .checked_add_months(Months::new(raw))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("month arithmetic overflow adding {} months to {}", raw, from),
        })?;

    if candidate > to { Ok(raw - 1) } else { Ok(raw) }
}

/// The hire-date anniversary in `year`; a 29 February hire date rolls over
/// to 1 March in common years.
fn anniversary_in(hire_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    hire_date
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn last_anniversary_on_or_before(
    hire_date: NaiveDate,
    termination_date: NaiveDate,
) -> EngineResult<NaiveDate> {
    let year = termination_date.year();
    let this_year = anniversary_in(hire_date, year).ok_or_else(|| EngineError::CalculationError {
        message: format!("no anniversary of {} in {}", hire_date, year),
    })?;

    if this_year <= termination_date {
        return Ok(this_year);
    }

    anniversary_in(hire_date, year - 1).ok_or_else(|| EngineError::CalculationError {
        message: format!("no anniversary of {} in {}", hire_date, year - 1),
    })
}
