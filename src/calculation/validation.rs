//! Whole-input validation of a termination scenario.
//!
//! Every check runs before any computation, so an invalid scenario never
//! produces a partial settlement.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ContractType, TerminationInput};

/// Most entries accepted in `last_6_months_wages`.
pub const MAX_WAGE_HISTORY: usize = 6;

/// Most entries accepted in `annual_remunerations`.
pub const MAX_ANNUAL_REMUNERATIONS: usize = 12;

/// Validates a termination scenario.
///
/// # Errors
///
/// - `InvalidDateRange` if the termination date is before the hire date
/// - `MissingContractEndDate` for a fixed-term contract without end date
/// - `InvalidInput` if a wage list is longer than its limit
/// - `InvalidNumericInput` naming the first negative field
/// Largest monetary amount accepted, in guaraníes (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Largest hour or day count accepted.
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

pub fn validate_input(input: &TerminationInput) -> EngineResult<()> {
    if input.termination_date < input.hire_date {
        return Err(EngineError::InvalidDateRange {
            hire_date: input.hire_date,
            termination_date: input.termination_date,
        });
    }

    if input.contract_type == ContractType::FixedTerm && input.contract_end_date.is_none() {
        return Err(EngineError::MissingContractEndDate);
    }

    check_len(
        "last_6_months_wages",
        input.last_6_months_wages.len(),
        MAX_WAGE_HISTORY,
    )?;
    check_len(
        "annual_remunerations",
        input.annual_remunerations.len(),
        MAX_ANNUAL_REMUNERATIONS,
    )?;

    for (i, wage) in input.last_6_months_wages.iter().enumerate() {
        within(&format!("last_6_months_wages[{}]", i), *wage, MAX_AMOUNT)?;
    }
    for (i, remuneration) in input.annual_remunerations.iter().enumerate() {
        within(
            &format!("annual_remunerations[{}]", i),
            *remuneration,
            MAX_AMOUNT,
        )?;
    }

    let amounts = [
        ("last_fixed_monthly_wage", input.last_fixed_monthly_wage),
        ("pending_wages", input.pending_wages),
        ("prior_year_bonus_owed", input.prior_year_bonus_owed),
        ("advances", input.advances),
        ("minimum_wage", input.minimum_wage),
    ];
    for (field, value) in amounts {
        within(field, value, MAX_AMOUNT)?;
    }

    let quantities = [
        ("unpaid_days_final_month", input.unpaid_days_final_month),
        ("overtime.day", input.overtime.day),
        ("overtime.night", input.overtime.night),
        ("overtime.holiday", input.overtime.holiday),
        ("overtime.regular_night", input.overtime.regular_night),
        ("prior_vacation_days_owed", input.prior_vacation_days_owed),
    ];
    for (field, value) in quantities {
        within(field, value, MAX_QUANTITY)?;
    }

    Ok(())
}

fn check_len(field: &str, len: usize, max: usize) -> EngineResult<()> {
    if len > max {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("{} entries given, at most {} allowed", len, max),
        });
    }
    Ok(())
}

fn within(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > max {
        return Err(EngineError::InvalidNumericInput {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TerminationCause;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid() -> TerminationInput {
        TerminationInput::new(
            date(2020, 1, 1),
            date(2024, 1, 1),
            TerminationCause::UnjustifiedDismissal,
            dec("3000000"),
            dec("2798309"),
        )
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&valid()).is_ok());
    }

    /// VL-001: negative scalar named in the error
    #[test]
    fn test_negative_scalar_rejected() {
        let mut input = valid();
        input.advances = dec("-1");
        match validate_input(&input) {
            Err(EngineError::InvalidNumericInput { field, value }) => {
                assert_eq!(field, "advances");
                assert_eq!(value, dec("-1"));
            }
            other => panic!("Expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_list_entry_names_index() {
        let mut input = valid();
        input.last_6_months_wages = vec![dec("3000000"), dec("-5")];
        match validate_input(&input) {
            Err(EngineError::InvalidNumericInput { field, .. }) => {
                assert_eq!(field, "last_6_months_wages[1]");
            }
            other => panic!("Expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_overtime_hours_rejected() {
        let mut input = valid();
        input.overtime.night = dec("-2");
        match validate_input(&input) {
            Err(EngineError::InvalidNumericInput { field, .. }) => {
                assert_eq!(field, "overtime.night");
            }
            other => panic!("Expected InvalidNumericInput, got {:?}", other),
        }
    }

    /// VL-002: fixed-term without end date
    #[test]
    fn test_fixed_term_requires_end_date() {
        let mut input = valid();
        input.contract_type = ContractType::FixedTerm;
        assert!(matches!(
            validate_input(&input),
            Err(EngineError::MissingContractEndDate)
        ));

        input.contract_end_date = Some(date(2024, 6, 30));
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_termination_before_hire_rejected() {
        let mut input = valid();
        input.termination_date = date(2019, 12, 31);
        assert!(matches!(
            validate_input(&input),
            Err(EngineError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_too_many_wages_rejected() {
        let mut input = valid();
        input.last_6_months_wages = vec![dec("1"); 7];
        match validate_input(&input) {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "last_6_months_wages");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_remunerations_rejected() {
        let mut input = valid();
        input.annual_remunerations = vec![dec("1"); 13];
        assert!(matches!(
            validate_input(&input),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    /// VL-003: amounts above the limit are rejected before any arithmetic
    #[test]
    fn test_oversized_wage_rejected() {
        let mut input = valid();
        input.last_fixed_monthly_wage = dec("1000000000000000000000000000");
        match validate_input(&input) {
            Err(EngineError::InvalidNumericInput { field, value }) => {
                assert_eq!(field, "last_fixed_monthly_wage");
                assert_eq!(value, dec("1000000000000000000000000000"));
            }
            other => panic!("Expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn test_limits_are_inclusive() {
        let mut input = valid();
        input.last_fixed_monthly_wage = MAX_AMOUNT;
        input.last_6_months_wages = vec![MAX_AMOUNT; 6];
        input.overtime.holiday = MAX_QUANTITY;
        assert!(validate_input(&input).is_ok());
        assert_eq!(MAX_AMOUNT, dec("1000000000000000"));

        input.overtime.holiday = MAX_QUANTITY + Decimal::ONE;
        match validate_input(&input) {
            Err(EngineError::InvalidNumericInput { field, .. }) => {
                assert_eq!(field, "overtime.holiday");
            }
            other => panic!("Expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_list_entry_names_index() {
        let mut input = valid();
        input.annual_remunerations = vec![dec("3000000"), dec("1000000000000001")];
        match validate_input(&input) {
            Err(EngineError::InvalidNumericInput { field, .. }) => {
                assert_eq!(field, "annual_remunerations[1]");
            }
            other => panic!("Expected InvalidNumericInput, got {:?}", other),
        }
    }
}
