//! Property tests for settlement totals, cause rules and business-day
//! arithmetic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use severance_engine::calculation::{
    advance_business_date, calculate_settlement, is_business_day,
};
use severance_engine::models::{
    DurationKind, HolidayCalendar, LineKind, TerminationCause, TerminationInput,
};

const CAUSES: [TerminationCause; 8] = [
    TerminationCause::UnjustifiedDismissal,
    TerminationCause::JustifiedDismissal,
    TerminationCause::JustifiedResignation,
    TerminationCause::VoluntaryResignation,
    TerminationCause::MutualAgreement,
    TerminationCause::WorkAbandonment,
    TerminationCause::DeathInService,
    TerminationCause::FixedTermCompletion,
];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn scenario(
    hire_offset: i64,
    tenure_days: i64,
    cause: TerminationCause,
    wage: u64,
) -> TerminationInput {
    let hire = base_date() + Duration::days(hire_offset);
    let mut input = TerminationInput::new(
        hire,
        hire + Duration::days(tenure_days),
        cause,
        Decimal::from(wage),
        Decimal::from(2_798_309u64),
    );
    input.last_6_months_wages = vec![Decimal::from(wage); 6];
    input
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn net_is_gross_minus_deductions(
        hire_offset in 0_i64..7000,
        tenure_days in 0_i64..6000,
        cause_idx in 0_usize..CAUSES.len(),
        wage in 1_000_000_u64..20_000_000,
        advances in 0_u64..2_000_000,
        children in 0_u32..8,
        enrolled in any::<bool>(),
        gave_notice in any::<bool>(),
        closure in any::<bool>(),
    ) {
        let mut input = scenario(hire_offset, tenure_days, CAUSES[cause_idx], wage);
        input.advances = Decimal::from(advances);
        input.dependent_children = children;
        input.social_security_enrolled = enrolled;
        input.gave_notice = gave_notice;
        input.employer_closure = closure;

        let result = calculate_settlement(&input).unwrap();

        let gross: Decimal = result
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::Income)
            .map(|l| l.amount)
            .sum();
        let deductions: Decimal = result
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::Deduction)
            .map(|l| l.amount)
            .sum();

        prop_assert_eq!(result.totals.total_gross, gross);
        prop_assert_eq!(result.totals.total_deductions, deductions);
        prop_assert_eq!(
            result.totals.total_net,
            result.totals.total_gross - result.totals.total_deductions
        );
        prop_assert!(result.lines.iter().all(|l| l.amount >= Decimal::ZERO));
    }

    #[test]
    fn probation_suppresses_notice_and_indemnity(
        hire_offset in 0_i64..7000,
        tenure_days in 0_i64..=60,
        cause_idx in 0_usize..CAUSES.len(),
        wage in 1_000_000_u64..20_000_000,
    ) {
        let input = scenario(hire_offset, tenure_days, CAUSES[cause_idx], wage);

        let result = calculate_settlement(&input).unwrap();

        prop_assert!(result.probation_period);
        prop_assert!(result.notice.is_none());
        prop_assert!(result.indemnity.is_none());
        prop_assert!(result.fixed_term_indemnity.is_none());
    }

    #[test]
    fn justified_dismissal_never_pays_indemnity(
        hire_offset in 0_i64..7000,
        tenure_days in 0_i64..12000,
        wage in 1_000_000_u64..20_000_000,
        closure in any::<bool>(),
        maternity in any::<bool>(),
    ) {
        let mut input = scenario(
            hire_offset,
            tenure_days,
            TerminationCause::JustifiedDismissal,
            wage,
        );
        input.employer_closure = closure;
        input.maternity_stability = maternity;

        let result = calculate_settlement(&input).unwrap();

        prop_assert!(result.indemnity.is_none());
        prop_assert!(result.notice.is_none());
        prop_assert!(result.legality_warning.is_none());
    }

    #[test]
    fn death_pays_half_of_unjustified_indemnity(
        hire_offset in 0_i64..7000,
        tenure_days in 61_i64..3600,
        wage in 1_000_000_u64..20_000_000,
    ) {
        let unjustified = scenario(
            hire_offset,
            tenure_days,
            TerminationCause::UnjustifiedDismissal,
            wage,
        );
        let death = scenario(hire_offset, tenure_days, TerminationCause::DeathInService, wage);

        let unjustified = calculate_settlement(&unjustified).unwrap();
        let death = calculate_settlement(&death).unwrap();

        prop_assert!(unjustified.seniority.years < 10);
        prop_assert_eq!(
            death.indemnity,
            unjustified.indemnity.map(|amount| amount * Decimal::new(5, 1))
        );
        prop_assert!(death.notice.is_none());
    }

    #[test]
    fn business_days_land_on_a_business_day(
        start_offset in 0_i64..20000,
        days in 1_u32..400,
    ) {
        let holidays = HolidayCalendar::new();
        let start = base_date() + Duration::days(start_offset);

        let due = advance_business_date(
            start,
            &format!("{} días hábiles", days),
            DurationKind::Business,
            &holidays,
        )
        .unwrap();

        prop_assert!(due > start);
        prop_assert!(is_business_day(due, &holidays));

        let counted = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= due)
            .filter(|d| is_business_day(*d, &holidays))
            .count();
        prop_assert_eq!(counted, days as usize);
    }

    #[test]
    fn five_business_days_from_a_weekday_is_one_week(start_offset in 0_i64..20000) {
        let holidays = HolidayCalendar::new();
        let start = base_date() + Duration::days(start_offset);
        prop_assume!(!matches!(start.weekday(), Weekday::Sat | Weekday::Sun));

        let due = advance_business_date(start, "5 días", DurationKind::Business, &holidays)
            .unwrap();

        prop_assert_eq!(due, start + Duration::days(7));
    }

    #[test]
    fn calendar_days_add_exactly(start_offset in 0_i64..20000, days in 0_u32..3650) {
        let holidays = HolidayCalendar::from_dates([base_date()]);
        let start = base_date() + Duration::days(start_offset);

        let due = advance_business_date(
            start,
            &format!("{} días corridos", days),
            DurationKind::Calendar,
            &holidays,
        )
        .unwrap();

        prop_assert_eq!(due, start + Duration::days(i64::from(days)));
    }
}
