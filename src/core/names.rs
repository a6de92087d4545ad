//! Fixed English name tables for months and weekdays.

use chrono::Month;
use serde::{Deserialize, Serialize};

use super::types::DayOfWeek;

/// Full month name for `month` (1..=12); empty for out-of-range input.
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|value| Month::try_from(value).ok())
        .map_or("", |month| month.name())
}

/// Three-letter month abbreviation.
#[must_use]
pub fn short_month_name(month: u32) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}

/// Width tier of the day-of-week header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayNameStyle {
    /// "Sunday"
    Long,
    /// "Sun"
    Short,
    /// "Su"
    Mini,
    /// "S"
    Micro,
}

impl DayNameStyle {
    /// Picks the widest tier that fits a column of `tile_width` pixels.
    #[must_use]
    pub fn for_tile_width(tile_width: u32) -> Self {
        match tile_width {
            width if width > 72 => DayNameStyle::Long,
            width if width > 42 => DayNameStyle::Short,
            width if width > 20 => DayNameStyle::Mini,
            _ => DayNameStyle::Micro,
        }
    }
}

#[must_use]
pub fn day_name(day: DayOfWeek, style: DayNameStyle) -> &'static str {
    let long = day.name();
    let len = match style {
        DayNameStyle::Long => long.len(),
        DayNameStyle::Short => 3,
        DayNameStyle::Mini => 2,
        DayNameStyle::Micro => 1,
    };
    &long[..len]
}
