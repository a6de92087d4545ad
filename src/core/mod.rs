pub mod calendar_math;
pub mod clock;
pub mod geometry;
pub mod names;
pub mod types;

pub use calendar_math::{CalendarMath, day_of_week, days_in_month, is_leap_year};
pub use clock::{Clock, FixedClock, SystemClock};
pub use geometry::{IntPoint, IntRect, IntSize};
pub use names::{DayNameStyle, day_name, month_name, short_month_name};
pub use types::{
    CalendarMode, DayOfWeek, MAX_VIEW_YEAR, MIN_VIEW_YEAR, ParseDayOfWeekError, ViewCoordinate,
};
