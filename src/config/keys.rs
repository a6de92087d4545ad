use super::store::ConfigKey;

pub const CALENDAR_DOMAIN: &str = "Calendar";
pub const VIEW_GROUP: &str = "View";

/// Calendar keys understood by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarConfigKey {
    FirstDayOfWeek,
    FirstDayOfWeekend,
    WeekendLength,
    ShowGrid,
    ShowDaysOfWeek,
    ShowMonthAndYear,
    ShowYear,
}

impl CalendarConfigKey {
    pub const ALL: [CalendarConfigKey; 7] = [
        CalendarConfigKey::FirstDayOfWeek,
        CalendarConfigKey::FirstDayOfWeekend,
        CalendarConfigKey::WeekendLength,
        CalendarConfigKey::ShowGrid,
        CalendarConfigKey::ShowDaysOfWeek,
        CalendarConfigKey::ShowMonthAndYear,
        CalendarConfigKey::ShowYear,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CalendarConfigKey::FirstDayOfWeek => "FirstDayOfWeek",
            CalendarConfigKey::FirstDayOfWeekend => "FirstDayOfWeekend",
            CalendarConfigKey::WeekendLength => "WeekendLength",
            CalendarConfigKey::ShowGrid => "ShowGrid",
            CalendarConfigKey::ShowDaysOfWeek => "ShowDaysOfWeek",
            CalendarConfigKey::ShowMonthAndYear => "ShowMonthAndYear",
            CalendarConfigKey::ShowYear => "ShowYear",
        }
    }

    /// Matches a store key against the `Calendar::View` keys.
    #[must_use]
    pub fn from_config_key(key: &ConfigKey) -> Option<Self> {
        if key.domain != CALENDAR_DOMAIN || key.group != VIEW_GROUP {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.name() == key.key)
    }

    #[must_use]
    pub fn config_key(self) -> ConfigKey {
        ConfigKey::new(CALENDAR_DOMAIN, VIEW_GROUP, self.name())
    }
}

/// Parses a boolean toggle stored either as text or as 0/1.
#[must_use]
pub fn parse_toggle(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}
