//! Procedural due-date calculation.
//!
//! Advances a start instant by a duration written as free text ("10 días
//! hábiles", "2 meses", "48 horas"). Day durations count either calendar
//! days or business days, where a business day is neither a Saturday, a
//! Sunday nor a date in the supplied holiday calendar.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::{EngineError, EngineResult};
use crate::models::{DurationKind, HolidayCalendar};

/// Largest amount accepted by [`DurationSpec::parse_strict`] by default.
pub const DEFAULT_MAX_DURATION_AMOUNT: u32 = 3650;

/// Unit detected in a duration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    /// Calendar months.
    Months,
    /// Hours.
    Hours,
    /// Days, business or calendar depending on the [`DurationKind`].
    Days,
    /// No recognizable unit; the start is returned unchanged.
    Unspecified,
}

/// A parsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationSpec {
    /// The first integer found in the text, 0 when none.
    pub amount: u32,
    /// The detected unit.
    pub unit: DurationUnit,
}

impl DurationSpec {
    /// Parses a duration text leniently.
    ///
    /// The text is lower-cased, decomposed and stripped of combining marks,
    /// so "Días" and "dias" are the same. The amount is the first run of
    /// digits, 0 when there is none. The unit is found by substring, checking
    /// `mes`, then `hora`, then `dia`.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::calculation::{DurationSpec, DurationUnit};
    ///
    /// let spec = DurationSpec::parse("10 Días hábiles");
    /// assert_eq!(spec.amount, 10);
    /// assert_eq!(spec.unit, DurationUnit::Days);
    ///
    /// // No digits: zero advancement
    /// assert_eq!(DurationSpec::parse("plazo razonable").amount, 0);
    /// ```
    pub fn parse(text: &str) -> Self {
        let clean = normalize_duration_text(text);
        let amount = first_integer(&clean).unwrap_or(0);

        let unit = if clean.contains("mes") {
            DurationUnit::Months
        } else if clean.contains("hora") {
            DurationUnit::Hours
        } else if clean.contains("dia") {
            DurationUnit::Days
        } else {
            DurationUnit::Unspecified
        };

        Self { amount, unit }
    }

    /// Parses a duration text, rejecting text without a number and amounts
    /// above `max_amount`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateDurationText` when the text has no digits, and
    /// `DurationOutOfRange` when the amount exceeds `max_amount` or does not
    /// fit in a `u32`.
    pub fn parse_strict(text: &str, max_amount: u32) -> EngineResult<Self> {
        let clean = normalize_duration_text(text);
        let digits = first_digit_run(&clean).ok_or_else(|| EngineError::DegenerateDurationText {
            text: text.to_string(),
        })?;

        let amount = digits
            .parse::<u32>()
            .map_err(|_| EngineError::DurationOutOfRange {
                amount: u32::MAX,
                max: max_amount,
            })?;
        if amount > max_amount {
            return Err(EngineError::DurationOutOfRange {
                amount,
                max: max_amount,
            });
        }

        Ok(Self::parse(text))
    }
}

/// Lower-cases `text`, decomposes it and drops the combining diacritical
/// marks block (U+0300 to U+036F).
pub fn normalize_duration_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn first_integer(text: &str) -> Option<u32> {
    // Runs too long for a u32 saturate.
    first_digit_run(text).map(|digits| digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Returns true if `date` is a weekday and not a holiday.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::is_business_day;
/// use severance_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let holidays = HolidayCalendar::from_dates([NaiveDate::from_ymd_opt(2026, 5, 14).unwrap()]);
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2026, 5, 14).unwrap(), &holidays));
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2026, 5, 16).unwrap(), &holidays));
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2026, 5, 18).unwrap(), &holidays));
/// ```
pub fn is_business_day(date: NaiveDate, holidays: &HolidayCalendar) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.is_holiday(date)
}

/// Advances `start` by the duration in `duration_text`.
///
/// Text without digits advances by zero; text without a unit leaves the
/// start unchanged. The business-day loop has no cap of its own, so
/// callers taking untrusted text should validate it with
/// [`DurationSpec::parse_strict`] first.
///
/// # Errors
///
/// Returns `CalculationError` if the result falls outside the supported
/// date range.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::advance_due_date;
/// use severance_engine::models::{DurationKind, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// // Friday 2026-10-16 + 1 business day is Monday 2026-10-19
/// let start = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let due = advance_due_date(start, "1 día", DurationKind::Business, &HolidayCalendar::new()).unwrap();
/// assert_eq!(due, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 30, 0).unwrap());
/// ```
pub fn advance_due_date(
    start: NaiveDateTime,
    duration_text: &str,
    kind: DurationKind,
    holidays: &HolidayCalendar,
) -> EngineResult<NaiveDateTime> {
    apply_duration(start, DurationSpec::parse(duration_text), kind, holidays)
}

/// Date-only form of [`advance_due_date`]; hour durations are applied from
/// midnight.
pub fn advance_business_date(
    start: NaiveDate,
    duration_text: &str,
    kind: DurationKind,
    holidays: &HolidayCalendar,
) -> EngineResult<NaiveDate> {
    advance_due_date(start.and_time(NaiveTime::MIN), duration_text, kind, holidays)
        .map(|due| due.date())
}

/// Advances `start` by an already parsed duration.
pub fn apply_duration(
    start: NaiveDateTime,
    spec: DurationSpec,
    kind: DurationKind,
    holidays: &HolidayCalendar,
) -> EngineResult<NaiveDateTime> {
    let overflow = || EngineError::CalculationError {
        message: format!(
            "advancing {} by {} {:?} leaves the supported date range",
            start, spec.amount, spec.unit
        ),
    };

    match spec.unit {
        DurationUnit::Months => start
            .checked_add_months(Months::new(spec.amount))
            .ok_or_else(overflow),
        DurationUnit::Hours => start
            .checked_add_signed(Duration::hours(i64::from(spec.amount)))
            .ok_or_else(overflow),
        DurationUnit::Days => match kind {
            DurationKind::Calendar => start
                .checked_add_signed(Duration::days(i64::from(spec.amount)))
                .ok_or_else(overflow),
            DurationKind::Business => {
                let mut current = start;
                let mut counted = 0;
                while counted < spec.amount {
                    current = current
                        .checked_add_signed(Duration::days(1))
                        .ok_or_else(overflow)?;
                    if is_business_day(current.date(), holidays) {
                        counted += 1;
                    }
                }
                Ok(current)
            }
        },
        DurationUnit::Unspecified => Ok(start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn no_holidays() -> HolidayCalendar {
        HolidayCalendar::new()
    }

    /// DD-001: normalization strips accents and case
    #[test]
    fn test_normalization() {
        assert_eq!(normalize_duration_text("10 DÍAS Hábiles"), "10 dias habiles");
        assert_eq!(normalize_duration_text("Año"), "ano");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(
            DurationSpec::parse("2 meses"),
            DurationSpec {
                amount: 2,
                unit: DurationUnit::Months
            }
        );
        assert_eq!(DurationSpec::parse("48 Horas").unit, DurationUnit::Hours);
        assert_eq!(DurationSpec::parse("5 días").unit, DurationUnit::Days);
        assert_eq!(DurationSpec::parse("5").unit, DurationUnit::Unspecified);
    }

    #[test]
    fn test_month_wins_over_day_substring() {
        // "mes" is checked before "dia"
        assert_eq!(DurationSpec::parse("1 mes y 5 dias").unit, DurationUnit::Months);
        assert_eq!(DurationSpec::parse("1 mes y 5 dias").amount, 1);
    }

    #[test]
    fn test_first_integer_is_used() {
        assert_eq!(DurationSpec::parse("plazo de 15 días, prorrogable 5").amount, 15);
    }

    /// DD-002: degenerate text advances by zero
    #[test]
    fn test_degenerate_text_returns_start() {
        let start = at(2026, 3, 2, 8, 0);
        assert_eq!(DurationSpec::parse("días hábiles").amount, 0);
        let due = advance_due_date(start, "días hábiles", DurationKind::Business, &no_holidays())
            .unwrap();
        assert_eq!(due, start);
    }

    #[test]
    fn test_parse_strict_rejects_missing_number() {
        match DurationSpec::parse_strict("días hábiles", DEFAULT_MAX_DURATION_AMOUNT) {
            Err(EngineError::DegenerateDurationText { text }) => assert_eq!(text, "días hábiles"),
            other => panic!("Expected DegenerateDurationText, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_strict_rejects_large_amounts() {
        match DurationSpec::parse_strict("3651 días", DEFAULT_MAX_DURATION_AMOUNT) {
            Err(EngineError::DurationOutOfRange { amount, max }) => {
                assert_eq!(amount, 3651);
                assert_eq!(max, 3650);
            }
            other => panic!("Expected DurationOutOfRange, got {:?}", other),
        }
        assert!(matches!(
            DurationSpec::parse_strict("99999999999 días", DEFAULT_MAX_DURATION_AMOUNT),
            Err(EngineError::DurationOutOfRange { .. })
        ));
        assert_eq!(
            DurationSpec::parse_strict("3650 días", DEFAULT_MAX_DURATION_AMOUNT)
                .unwrap()
                .amount,
            3650
        );
    }

    /// DD-003: Friday plus one business day is Monday
    #[test]
    fn test_friday_plus_one_business_day_is_monday() {
        let due = advance_business_date(date(2026, 10, 16), "1 día", DurationKind::Business, &no_holidays())
            .unwrap();
        assert_eq!(due, date(2026, 10, 19));
    }

    /// DD-004: five business days skip one weekend
    #[test]
    fn test_five_business_days_is_seven_calendar_days() {
        for start in [date(2026, 10, 12), date(2026, 10, 14), date(2026, 10, 16)] {
            let due = advance_business_date(start, "5 días", DurationKind::Business, &no_holidays())
                .unwrap();
            assert_eq!(due, start + Duration::days(7), "from {}", start);
        }
    }

    /// DD-005: zero days is the identity
    #[test]
    fn test_zero_days_is_identity() {
        let start = date(2026, 10, 17);
        let due = advance_business_date(start, "0 días", DurationKind::Business, &no_holidays())
            .unwrap();
        assert_eq!(due, start);
    }

    #[test]
    fn test_holidays_are_skipped() {
        // Wednesday 2026-05-13; 14 and 15 May are holidays
        let holidays = HolidayCalendar::from_dates([date(2026, 5, 14), date(2026, 5, 15)]);
        let due = advance_business_date(date(2026, 5, 13), "1 dia", DurationKind::Business, &holidays)
            .unwrap();
        assert_eq!(due, date(2026, 5, 18));
    }

    #[test]
    fn test_holiday_in_other_year_is_ignored() {
        let holidays = HolidayCalendar::from_dates([date(2025, 5, 14)]);
        let due = advance_business_date(date(2026, 5, 13), "1 dia", DurationKind::Business, &holidays)
            .unwrap();
        assert_eq!(due, date(2026, 5, 14));
    }

    #[test]
    fn test_calendar_days_ignore_weekends_and_holidays() {
        let holidays = HolidayCalendar::from_dates([date(2026, 10, 19)]);
        let due = advance_business_date(date(2026, 10, 16), "3 días corridos", DurationKind::Calendar, &holidays)
            .unwrap();
        assert_eq!(due, date(2026, 10, 19));
    }

    #[test]
    fn test_months_clip_to_month_end() {
        let due = advance_due_date(at(2026, 1, 31, 10, 0), "1 mes", DurationKind::Business, &no_holidays())
            .unwrap();
        assert_eq!(due, at(2026, 2, 28, 10, 0));
    }

    #[test]
    fn test_months_ignore_kind() {
        let business = advance_business_date(date(2026, 3, 15), "3 meses", DurationKind::Business, &no_holidays())
            .unwrap();
        let calendar = advance_business_date(date(2026, 3, 15), "3 meses", DurationKind::Calendar, &no_holidays())
            .unwrap();
        assert_eq!(business, date(2026, 6, 15));
        assert_eq!(business, calendar);
    }

    #[test]
    fn test_hours_keep_time_of_day_arithmetic() {
        let due = advance_due_date(at(2026, 10, 16, 18, 0), "48 horas", DurationKind::Business, &no_holidays())
            .unwrap();
        assert_eq!(due, at(2026, 10, 18, 18, 0));
    }

    #[test]
    fn test_business_days_preserve_time_of_day() {
        let due = advance_due_date(at(2026, 10, 16, 14, 45), "2 días hábiles", DurationKind::Business, &no_holidays())
            .unwrap();
        assert_eq!(due, at(2026, 10, 20, 14, 45));
    }

    #[test]
    fn test_starting_on_weekend() {
        // Saturday + 1 business day is Monday
        let due = advance_business_date(date(2026, 10, 17), "1 día", DurationKind::Business, &no_holidays())
            .unwrap();
        assert_eq!(due, date(2026, 10, 19));
    }
}
