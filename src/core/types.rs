use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    #[must_use]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Day for a Sunday-based index; wraps modulo 7.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    #[must_use]
    pub fn offset(self, days: u32) -> Self {
        Self::from_index(self.index() + days % 7)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        Self::from_index(value.num_days_from_sunday())
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDayOfWeekError(pub String);

impl fmt::Display for ParseDayOfWeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown day of week `{}`", self.0)
    }
}

impl std::error::Error for ParseDayOfWeekError {}

impl FromStr for DayOfWeek {
    type Err = ParseDayOfWeekError;

    /// Accepts full English names and three-letter abbreviations, any case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|day| {
                trimmed.eq_ignore_ascii_case(day.name())
                    || trimmed.eq_ignore_ascii_case(&day.name()[..3])
            })
            .ok_or_else(|| ParseDayOfWeekError(value.to_owned()))
    }
}

/// Which tile collection is authoritative and how navigation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalendarMode {
    #[default]
    Month,
    Year,
}

impl CalendarMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            CalendarMode::Month => CalendarMode::Year,
            CalendarMode::Year => CalendarMode::Month,
        }
    }
}

/// Earliest view year whose whole grid, including the trailing days of the
/// previous December, maps onto `NaiveDate`.
pub const MIN_VIEW_YEAR: i32 = -262_142;

/// Latest view year whose whole grid, including the leading days of the
/// next January, maps onto `NaiveDate`.
pub const MAX_VIEW_YEAR: i32 = 262_141;

/// The `(year, month)` currently on display, independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewCoordinate {
    pub year: i32,
    pub month: u32,
}

impl ViewCoordinate {
    /// First month of [`MIN_VIEW_YEAR`].
    pub const MIN: Self = Self {
        year: MIN_VIEW_YEAR,
        month: 1,
    };

    /// Last month of [`MAX_VIEW_YEAR`].
    pub const MAX: Self = Self {
        year: MAX_VIEW_YEAR,
        month: 12,
    };

    /// Builds a coordinate; returns `None` when `month` is outside `1..=12`
    /// or `year` is outside `MIN_VIEW_YEAR..=MAX_VIEW_YEAR`.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        Self::try_new(year, month).ok()
    }

    pub fn try_new(year: i32, month: u32) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(MIN_VIEW_YEAR..=MAX_VIEW_YEAR).contains(&year) {
            return Err(CalendarError::InvalidViewYear { year });
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`, clamped to the displayable range.
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        Self::from_month_index(month_index(date.year(), date.month()))
    }

    /// Shifts by `delta` months, carrying into the year at both ends.
    ///
    /// Saturates at [`ViewCoordinate::MIN`] and [`ViewCoordinate::MAX`], so
    /// stepping back and forth is an identity only away from those bounds.
    #[must_use]
    pub fn add_months(self, delta: i32) -> Self {
        Self::from_month_index(month_index(self.year, self.month) + i64::from(delta))
    }

    /// Shifts by `delta` years, keeping the month; saturates like `add_months`.
    #[must_use]
    pub fn add_years(self, delta: i32) -> Self {
        let year = (i64::from(self.year) + i64::from(delta))
            .clamp(i64::from(MIN_VIEW_YEAR), i64::from(MAX_VIEW_YEAR));
        Self {
            year: year as i32,
            month: self.month.clamp(1, 12),
        }
    }

    /// Neighbouring month without saturation, so the grid can borrow days
    /// from just outside the displayable range.
    pub(crate) fn adjacent(self, delta: i32) -> Self {
        Self::unclamped(month_index(self.year, self.month) + i64::from(delta))
    }

    fn from_month_index(index: i64) -> Self {
        Self::unclamped(index.clamp(
            month_index(MIN_VIEW_YEAR, 1),
            month_index(MAX_VIEW_YEAR, 12),
        ))
    }

    fn unclamped(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month.clamp(1, 12)) - 1
}

impl Default for ViewCoordinate {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
        }
    }
}

impl fmt::Display for ViewCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbours_of_the_bounds_are_representable() {
        let before = ViewCoordinate::MIN.adjacent(-1);
        let after = ViewCoordinate::MAX.adjacent(1);
        assert_eq!(before, ViewCoordinate { year: MIN_VIEW_YEAR - 1, month: 12 });
        assert_eq!(after, ViewCoordinate { year: MAX_VIEW_YEAR + 1, month: 1 });
        assert!(NaiveDate::from_ymd_opt(before.year, before.month, 1).is_some());
        assert!(NaiveDate::from_ymd_opt(after.year, after.month, 31).is_some());
    }

    #[test]
    fn stepping_saturates_at_the_displayable_range() {
        assert_eq!(ViewCoordinate::MAX.add_months(1), ViewCoordinate::MAX);
        assert_eq!(ViewCoordinate::MIN.add_months(-1), ViewCoordinate::MIN);
        assert_eq!(ViewCoordinate::MAX.add_months(i32::MAX), ViewCoordinate::MAX);
        assert_eq!(
            ViewCoordinate { year: MAX_VIEW_YEAR, month: 6 }.add_years(5),
            ViewCoordinate { year: MAX_VIEW_YEAR, month: 6 }
        );
        assert_eq!(
            ViewCoordinate { year: MIN_VIEW_YEAR, month: 6 }.add_years(i32::MIN),
            ViewCoordinate { year: MIN_VIEW_YEAR, month: 6 }
        );
    }

    #[test]
    fn out_of_range_years_are_rejected() {
        assert!(matches!(
            ViewCoordinate::try_new(MAX_VIEW_YEAR + 1, 1),
            Err(CalendarError::InvalidViewYear { year }) if year == MAX_VIEW_YEAR + 1
        ));
        assert!(ViewCoordinate::new(MIN_VIEW_YEAR - 1, 12).is_none());
        assert!(ViewCoordinate::new(MAX_VIEW_YEAR, 12).is_some());
        assert!(matches!(
            ViewCoordinate::try_new(i32::MAX, 13),
            Err(CalendarError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn of_date_clamps_into_the_range() {
        assert_eq!(ViewCoordinate::of_date(NaiveDate::MAX), ViewCoordinate::MAX);
        assert_eq!(ViewCoordinate::of_date(NaiveDate::MIN), ViewCoordinate::MIN);
    }
}
