use calendar_rs::core::{
    CalendarMath, DayOfWeek, ViewCoordinate, day_of_week, days_in_month, is_leap_year,
};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

#[test]
fn leap_years_follow_gregorian_rules() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert!(is_leap_year(-4));
}

#[test]
fn month_lengths() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2024, 4), 30);
    assert_eq!(days_in_month(2024, 12), 31);
    assert_eq!(days_in_month(2024, 13), 0);
    assert_eq!(days_in_month(2024, 0), 0);
}

#[test]
fn weekday_of_known_dates() {
    assert_eq!(day_of_week(1970, 1, 1), DayOfWeek::Thursday);
    assert_eq!(day_of_week(2024, 3, 1), DayOfWeek::Friday);
    assert_eq!(day_of_week(2000, 2, 29), DayOfWeek::Tuesday);
}

#[test]
fn weekday_index_is_relative_to_first_day_of_week() {
    let sunday_first = CalendarMath::default();
    let monday_first = CalendarMath::new(DayOfWeek::Monday, DayOfWeek::Saturday, 2);
    assert_eq!(sunday_first.day_of_week_index(2024, 3, 1), 5);
    assert_eq!(monday_first.day_of_week_index(2024, 3, 1), 4);
    assert_eq!(monday_first.day_of_week_index(2024, 4, 1), 0);
}

#[test]
fn default_weekend_is_saturday_and_sunday() {
    let math = CalendarMath::default();
    let weekend: Vec<DayOfWeek> = DayOfWeek::ALL
        .into_iter()
        .filter(|day| math.is_weekend(*day))
        .collect();
    assert_eq!(weekend, vec![DayOfWeek::Sunday, DayOfWeek::Saturday]);
    assert!(math.is_weekend_index(0));
    assert!(math.is_weekend_index(6));
}

#[test]
fn zero_length_weekend_marks_nothing() {
    let none = CalendarMath::new(DayOfWeek::Sunday, DayOfWeek::Saturday, -3);
    assert!(DayOfWeek::ALL.into_iter().all(|day| !none.is_weekend(day)));
}

#[test]
fn add_months_crosses_year_boundaries() {
    let view = ViewCoordinate::new(2023, 12).expect("valid view");
    assert_eq!(view.add_months(1), ViewCoordinate { year: 2024, month: 1 });
    assert_eq!(view.add_months(-12), ViewCoordinate { year: 2022, month: 12 });
    assert_eq!(view.add_months(-24), ViewCoordinate { year: 2021, month: 12 });
    assert_eq!(
        ViewCoordinate { year: 1, month: 1 }.add_months(-1),
        ViewCoordinate { year: 0, month: 12 }
    );
}

#[test]
fn view_coordinate_rejects_invalid_months() {
    assert!(ViewCoordinate::new(2024, 0).is_none());
    assert!(ViewCoordinate::new(2024, 13).is_none());
    assert!(ViewCoordinate::new(i32::MAX, 6).is_none());
}

proptest! {
    #[test]
    fn weekday_matches_chrono(days in -200_000i32..200_000) {
        let date = NaiveDate::from_num_days_from_ce_opt(730_000 + days).expect("in range");
        let expected = DayOfWeek::from(date.weekday());
        prop_assert_eq!(day_of_week(date.year(), date.month(), date.day()), expected);
    }

    #[test]
    fn days_in_month_matches_chrono(year in -3_000i32..3_000, month in 1u32..=12) {
        let first = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month");
        let next = ViewCoordinate { year, month }.add_months(1);
        let next_first = NaiveDate::from_ymd_opt(next.year, next.month, 1).expect("next first");
        let expected = u32::try_from((next_first - first).num_days()).expect("positive");
        prop_assert_eq!(days_in_month(year, month), expected);
    }

    // Away from the saturating bounds of the displayable range.
    #[test]
    fn add_months_round_trips(
        year in -100_000i32..100_000,
        month in 1u32..=12,
        delta in -5_000i32..5_000
    ) {
        let view = ViewCoordinate { year, month };
        prop_assert_eq!(view.add_months(delta).add_months(-delta), view);
    }
}
