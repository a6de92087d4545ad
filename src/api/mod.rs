mod config_binding;
mod date_formatter;
mod event_dispatch;
mod interaction_controller;
mod listener_registry;
mod navigation_controller;
mod render_frame_builder;
mod render_style;
mod snapshot;
mod widget;
mod widget_config;

pub use config_binding::{apply_config_i32, apply_config_string, settings_from_store};
pub use date_formatter::{DateFormat, format_view};
pub use render_style::CalendarPalette;
pub use snapshot::{
    CALENDAR_SNAPSHOT_JSON_SCHEMA_V1, CalendarSnapshot, CalendarSnapshotJsonContractV1,
};
pub use widget::CalendarWidget;
pub use widget_config::CalendarWidgetConfig;
