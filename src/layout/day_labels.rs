use smallvec::SmallVec;

use crate::core::{CalendarMath, DayNameStyle, day_name};

use super::tiles::DayLabel;

pub const DAY_LABEL_HEIGHT: u32 = 16;
pub const DAY_LABEL_FONT_SIZE_PX: f64 = 12.0;

pub type DayLabels = SmallVec<[DayLabel; 7]>;

/// Deterministic width estimate so layout never depends on a font backend.
#[must_use]
pub fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> u32 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            'M' | 'W' | 'm' | 'w' => 0.83,
            'i' | 'l' | 'I' | 'j' | 't' | 'f' => 0.30,
            ch if ch.is_ascii_uppercase() => 0.66,
            _ => 0.55,
        }
    });
    (units * font_size_px).ceil() as u32
}

/// Seven header labels starting at the configured first day of the week.
#[must_use]
pub fn build_day_labels(math: CalendarMath, style: DayNameStyle) -> DayLabels {
    (0..7)
        .map(|index| {
            let day = math.day_at_index(index);
            let name = day_name(day, style);
            DayLabel {
                day,
                name,
                measured_width: estimate_label_text_width_px(name, DAY_LABEL_FONT_SIZE_PX),
                height: DAY_LABEL_HEIGHT,
            }
        })
        .collect()
}
