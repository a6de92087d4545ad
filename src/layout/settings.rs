use serde::{Deserialize, Serialize};

use crate::core::{CalendarMath, DayOfWeek};
use crate::error::{CalendarError, CalendarResult};

/// Arrangement of the twelve month tiles in Year mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGridShape {
    pub columns: u32,
    pub rows: u32,
}

impl Default for YearGridShape {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 3,
        }
    }
}

impl YearGridShape {
    pub fn validate(self) -> CalendarResult<Self> {
        if self.columns.checked_mul(self.rows) != Some(12) {
            return Err(CalendarError::InvalidYearGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self)
    }
}

/// Display and weekday options mirrored from the configuration store.
///
/// These are the values the user configured; the layout engine may still hide
/// chrome that does not fit (see `ResolvedChrome`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub show_grid: bool,
    pub show_year: bool,
    pub show_month_and_year: bool,
    pub show_days_of_week: bool,
    pub first_day_of_week: DayOfWeek,
    pub first_day_of_weekend: DayOfWeek,
    pub weekend_length: i32,
    pub year_grid: YearGridShape,
    /// Hide title/grid lines when the widget is too small to fit them.
    pub auto_adjust_chrome: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_year: false,
            show_month_and_year: true,
            show_days_of_week: true,
            first_day_of_week: DayOfWeek::Sunday,
            first_day_of_weekend: DayOfWeek::Saturday,
            weekend_length: 2,
            year_grid: YearGridShape::default(),
            auto_adjust_chrome: true,
        }
    }
}

impl CalendarSettings {
    #[must_use]
    pub fn calendar_math(&self) -> CalendarMath {
        CalendarMath::new(
            self.first_day_of_week,
            self.first_day_of_weekend,
            self.weekend_length,
        )
    }

    pub fn validate(self) -> CalendarResult<Self> {
        self.year_grid.validate()?;
        Ok(self)
    }
}
