use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{CalendarMode, DayOfWeek, IntSize, ViewCoordinate};
use crate::layout::{CalendarSettings, YearGridShape};

/// Public widget bootstrap configuration.
///
/// Serializable so hosts can persist and restore a calendar's setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWidgetConfig {
    pub size: IntSize,
    #[serde(default)]
    pub mode: CalendarMode,
    /// Initial view; defaults to the month of the selected date.
    #[serde(default)]
    pub view: Option<ViewCoordinate>,
    /// Initial selection; defaults to the clock's today.
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
    #[serde(default)]
    pub settings: CalendarSettings,
}

impl CalendarWidgetConfig {
    #[must_use]
    pub fn new(size: IntSize) -> Self {
        Self {
            size,
            mode: CalendarMode::Month,
            view: None,
            selected_date: None,
            settings: CalendarSettings::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: CalendarMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the initial view; year and month are validated when the widget is
    /// built.
    #[must_use]
    pub fn with_view(mut self, year: i32, month: u32) -> Self {
        self.view = Some(ViewCoordinate { year, month });
        self
    }

    #[must_use]
    pub fn with_selected_date(mut self, date: NaiveDate) -> Self {
        self.selected_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: CalendarSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, day: DayOfWeek) -> Self {
        self.settings.first_day_of_week = day;
        self
    }

    #[must_use]
    pub fn with_weekend(mut self, first_day: DayOfWeek, length: i32) -> Self {
        self.settings.first_day_of_weekend = first_day;
        self.settings.weekend_length = length;
        self
    }

    #[must_use]
    pub fn with_year_grid(mut self, columns: u32, rows: u32) -> Self {
        self.settings.year_grid = YearGridShape { columns, rows };
        self
    }

    #[must_use]
    pub fn with_auto_adjust_chrome(mut self, enabled: bool) -> Self {
        self.settings.auto_adjust_chrome = enabled;
        self
    }
}
