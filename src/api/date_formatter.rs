use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{ViewCoordinate, month_name, short_month_name};
use crate::error::{CalendarError, CalendarResult};
use crate::render::Renderer;

use super::CalendarWidget;

/// Longest decimal rendering of an `i32` year, sign included.
const MAX_YEAR_DIGITS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// "Jan 2024"
    ShortMonthYear,
    /// "January 2024"
    #[default]
    LongMonthYear,
    /// "January"
    MonthOnly,
    /// "2024"
    YearOnly,
}

/// Renders `view` as text in the requested format.
///
/// The buffer is reserved fallibly so an allocation failure comes back as
/// `CalendarError::Format` instead of aborting.
pub fn format_view(view: ViewCoordinate, format: DateFormat) -> CalendarResult<String> {
    let (month, with_year) = match format {
        DateFormat::ShortMonthYear => (Some(short_month_name(view.month)), true),
        DateFormat::LongMonthYear => (Some(month_name(view.month)), true),
        DateFormat::MonthOnly => (Some(month_name(view.month)), false),
        DateFormat::YearOnly => (None, true),
    };

    let mut text = String::new();
    let capacity = month.map_or(0, str::len) + 1 + MAX_YEAR_DIGITS;
    text.try_reserve(capacity)
        .map_err(|err| CalendarError::Format(format!("cannot allocate date text: {err}")))?;

    if let Some(month) = month {
        text.push_str(month);
    }
    if with_year {
        if !text.is_empty() {
            text.push(' ');
        }
        write!(text, "{}", view.year)
            .map_err(|err| CalendarError::Format(format!("cannot write year: {err}")))?;
    }
    Ok(text)
}

impl<R: Renderer> CalendarWidget<R> {
    pub fn formatted_date(&self, format: DateFormat) -> CalendarResult<String> {
        format_view(self.view, format)
    }
}
