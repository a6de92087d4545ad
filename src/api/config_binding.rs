use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::{
    CALENDAR_DOMAIN, CalendarConfigKey, ConfigKey, ConfigListener, ConfigStore, ConfigValue,
    parse_toggle,
};
use crate::core::calendar_math::clamp_weekend_length;
use crate::core::{Clock, DayOfWeek, SystemClock};
use crate::error::CalendarResult;
use crate::layout::CalendarSettings;
use crate::render::Renderer;

use super::{CalendarWidget, CalendarWidgetConfig};

/// Applies one textual store value. Returns `true` when `settings` changed.
pub fn apply_config_string(
    settings: &mut CalendarSettings,
    key: CalendarConfigKey,
    value: &str,
) -> bool {
    let before = *settings;
    match key {
        CalendarConfigKey::FirstDayOfWeek | CalendarConfigKey::FirstDayOfWeekend => {
            match value.parse::<DayOfWeek>() {
                Ok(day) if key == CalendarConfigKey::FirstDayOfWeek => {
                    settings.first_day_of_week = day;
                }
                Ok(day) => settings.first_day_of_weekend = day,
                Err(err) => warn!(key = key.name(), %err, "ignoring calendar config value"),
            }
        }
        CalendarConfigKey::WeekendLength => match value.trim().parse::<i32>() {
            Ok(length) => return apply_config_i32(settings, key, length),
            Err(err) => warn!(key = key.name(), value, %err, "ignoring calendar config value"),
        },
        _ => match parse_toggle(value) {
            Some(enabled) => set_toggle(settings, key, enabled),
            None => warn!(key = key.name(), value, "ignoring calendar config value"),
        },
    }
    *settings != before
}

/// Applies one integer store value. Returns `true` when `settings` changed.
pub fn apply_config_i32(
    settings: &mut CalendarSettings,
    key: CalendarConfigKey,
    value: i32,
) -> bool {
    let before = *settings;
    match key {
        CalendarConfigKey::WeekendLength => {
            settings.weekend_length = clamp_weekend_length(value) as i32;
        }
        CalendarConfigKey::FirstDayOfWeek | CalendarConfigKey::FirstDayOfWeekend => {
            let Ok(index @ 0..=6) = u32::try_from(value) else {
                warn!(key = key.name(), value, "ignoring out-of-range weekday index");
                return false;
            };
            let day = DayOfWeek::from_index(index);
            if key == CalendarConfigKey::FirstDayOfWeek {
                settings.first_day_of_week = day;
            } else {
                settings.first_day_of_weekend = day;
            }
        }
        _ => set_toggle(settings, key, value != 0),
    }
    *settings != before
}

fn set_toggle(settings: &mut CalendarSettings, key: CalendarConfigKey, enabled: bool) {
    match key {
        CalendarConfigKey::ShowGrid => settings.show_grid = enabled,
        CalendarConfigKey::ShowDaysOfWeek => settings.show_days_of_week = enabled,
        CalendarConfigKey::ShowMonthAndYear => settings.show_month_and_year = enabled,
        CalendarConfigKey::ShowYear => settings.show_year = enabled,
        CalendarConfigKey::FirstDayOfWeek
        | CalendarConfigKey::FirstDayOfWeekend
        | CalendarConfigKey::WeekendLength => {}
    }
}

/// Overlays every calendar key present in `store` onto `base`.
#[must_use]
pub fn settings_from_store(store: &ConfigStore, base: CalendarSettings) -> CalendarSettings {
    let mut settings = base;
    for key in CalendarConfigKey::ALL {
        match store.get(&key.config_key()) {
            Some(ConfigValue::String(value)) => {
                apply_config_string(&mut settings, key, &value);
            }
            Some(ConfigValue::I32(value)) => {
                apply_config_i32(&mut settings, key, value);
            }
            None => {}
        }
    }
    settings
}

impl<R: Renderer> ConfigListener for CalendarWidget<R> {
    fn config_string_did_change(&mut self, key: &ConfigKey, value: &str) {
        let Some(calendar_key) = CalendarConfigKey::from_config_key(key) else {
            return;
        };
        let mut settings = self.settings;
        if apply_config_string(&mut settings, calendar_key, value) {
            debug!(key = calendar_key.name(), value, "calendar config changed");
            self.settings = settings;
            self.update_tiles();
        }
    }

    fn config_i32_did_change(&mut self, key: &ConfigKey, value: i32) {
        let Some(calendar_key) = CalendarConfigKey::from_config_key(key) else {
            return;
        };
        let mut settings = self.settings;
        if apply_config_i32(&mut settings, calendar_key, value) {
            debug!(key = calendar_key.name(), value, "calendar config changed");
            self.settings = settings;
            self.update_tiles();
        }
    }
}

impl<R: Renderer> CalendarWidget<R> {
    /// Re-reads every calendar key from `store` and relayouts on change.
    pub fn load_settings_from(&mut self, store: &ConfigStore) {
        let settings = settings_from_store(store, self.settings);
        if settings != self.settings {
            self.settings = settings;
            self.update_tiles();
        }
    }

    #[must_use]
    pub fn has_config_subscription(&self) -> bool {
        self.config_subscription.is_some()
    }

    /// Stops following store changes.
    pub fn detach_config(&mut self) {
        self.config_subscription = None;
    }
}

impl<R: Renderer + 'static> CalendarWidget<R> {
    /// Builds a widget bound to `store`: initial settings come from the store
    /// and later writes under the `Calendar` domain are applied as they happen.
    ///
    /// The subscription lives inside the widget and is released with it.
    pub fn new_shared(
        renderer: R,
        config: CalendarWidgetConfig,
        store: &ConfigStore,
    ) -> CalendarResult<Rc<RefCell<Self>>> {
        Self::new_shared_with_clock(renderer, config, store, SystemClock)
    }

    pub fn new_shared_with_clock(
        renderer: R,
        config: CalendarWidgetConfig,
        store: &ConfigStore,
        clock: impl Clock + 'static,
    ) -> CalendarResult<Rc<RefCell<Self>>> {
        let mut widget = Self::with_clock(renderer, config, clock)?;
        widget.load_settings_from(store);

        let shared = Rc::new(RefCell::new(widget));
        let listener: Rc<RefCell<dyn ConfigListener>> = shared.clone();
        let subscription = store.subscribe(CALENDAR_DOMAIN, Rc::downgrade(&listener));
        shared.borrow_mut().config_subscription = Some(subscription);
        Ok(shared)
    }
}
