//! Proleptic Gregorian calendar arithmetic.
//!
//! Everything here is pure integer math so layout stays deterministic and
//! independent of the host's date library. `chrono` is only used at the edges
//! (selection and "today") and to cross-check these routines in tests.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::DayOfWeek;

pub const DAYS_PER_WEEK: u32 = 7;
pub const MAX_WEEKEND_LENGTH: i32 = 7;

#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12); 0 for an out-of-range month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date (Howard Hinnant's algorithm).
#[must_use]
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Weekday of a civil date.
#[must_use]
pub fn day_of_week(year: i32, month: u32, day: u32) -> DayOfWeek {
    // 1970-01-01 was a Thursday.
    let index = (days_from_civil(year, month, day) + 4).rem_euclid(7);
    DayOfWeek::from_index(index as u32)
}

/// Weekday/weekend parameters derived from the configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMath {
    first_day_of_week: DayOfWeek,
    first_day_of_weekend: DayOfWeek,
    weekend_length: u32,
}

impl Default for CalendarMath {
    fn default() -> Self {
        Self::new(DayOfWeek::Sunday, DayOfWeek::Saturday, 2)
    }
}

impl CalendarMath {
    /// `weekend_length` is clamped to `0..=7`.
    #[must_use]
    pub fn new(
        first_day_of_week: DayOfWeek,
        first_day_of_weekend: DayOfWeek,
        weekend_length: i32,
    ) -> Self {
        Self {
            first_day_of_week,
            first_day_of_weekend,
            weekend_length: clamp_weekend_length(weekend_length),
        }
    }

    #[must_use]
    pub fn first_day_of_week(self) -> DayOfWeek {
        self.first_day_of_week
    }

    #[must_use]
    pub fn first_day_of_weekend(self) -> DayOfWeek {
        self.first_day_of_weekend
    }

    #[must_use]
    pub fn weekend_length(self) -> u32 {
        self.weekend_length
    }

    /// Column index (0..=6) of a date, with `first_day_of_week` in column 0.
    #[must_use]
    pub fn day_of_week_index(self, year: i32, month: u32, day: u32) -> u32 {
        self.normalize(day_of_week(year, month, day))
    }

    #[must_use]
    pub fn day_of_week_index_of(self, date: NaiveDate) -> u32 {
        self.normalize(DayOfWeek::from(date.weekday()))
    }

    #[must_use]
    pub fn normalize(self, day: DayOfWeek) -> u32 {
        (day.index() + DAYS_PER_WEEK - self.first_day_of_week.index()) % DAYS_PER_WEEK
    }

    /// Weekday shown in column `index`.
    #[must_use]
    pub fn day_at_index(self, index: u32) -> DayOfWeek {
        self.first_day_of_week.offset(index)
    }

    #[must_use]
    pub fn is_weekend(self, day: DayOfWeek) -> bool {
        let start = self.first_day_of_weekend.index();
        let mut index = day.index();
        if index < start {
            index += DAYS_PER_WEEK;
        }
        index < start + self.weekend_length
    }

    #[must_use]
    pub fn is_weekend_index(self, index: u32) -> bool {
        self.is_weekend(self.day_at_index(index))
    }
}

#[must_use]
pub fn clamp_weekend_length(length: i32) -> u32 {
    length.clamp(0, MAX_WEEKEND_LENGTH) as u32
}
