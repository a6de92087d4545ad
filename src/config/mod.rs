//! Configuration store shared by widgets and the keys the calendar reads.

mod keys;
mod store;

pub use keys::{CALENDAR_DOMAIN, CalendarConfigKey, VIEW_GROUP, parse_toggle};
pub use store::{ConfigKey, ConfigListener, ConfigStore, ConfigSubscription, ConfigValue};
