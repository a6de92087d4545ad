use std::cell::RefCell;
use std::rc::Rc;

use calendar_rs::api::{apply_config_i32, apply_config_string, settings_from_store};
use calendar_rs::config::{CALENDAR_DOMAIN, CalendarConfigKey, ConfigStore, VIEW_GROUP};
use calendar_rs::core::{DayOfWeek, FixedClock, IntSize};
use calendar_rs::layout::CalendarSettings;
use calendar_rs::render::NullRenderer;
use calendar_rs::{CalendarWidget, CalendarWidgetConfig};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

fn shared_widget(store: &ConfigStore) -> Rc<RefCell<CalendarWidget<NullRenderer>>> {
    let config = CalendarWidgetConfig::new(IntSize::new(700, 640)).with_view(2024, 3);
    CalendarWidget::new_shared_with_clock(
        NullRenderer::default(),
        config,
        store,
        FixedClock(today()),
    )
    .expect("widget init")
}

#[test]
fn initial_settings_come_from_the_store() {
    let store = ConfigStore::new();
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "FirstDayOfWeek", "Monday");
    store.write_i32(CALENDAR_DOMAIN, VIEW_GROUP, "WeekendLength", 1);
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "ShowGrid", "false");

    let widget = shared_widget(&store);
    let widget = widget.borrow();
    let settings = widget.settings();
    assert_eq!(settings.first_day_of_week, DayOfWeek::Monday);
    assert_eq!(settings.weekend_length, 1);
    assert!(!settings.show_grid);
    assert!(!widget.has_grid());
    assert!(widget.has_config_subscription());
    // March 1, 2024 (Friday) lands in column 4 when Monday comes first.
    assert_eq!(widget.day_tiles()[4].day, 1);
}

#[test]
fn store_writes_relayout_the_widget() {
    let store = ConfigStore::new();
    let widget = shared_widget(&store);
    assert_eq!(widget.borrow().day_tiles()[5].day, 1);

    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "FirstDayOfWeek", "Monday");
    assert_eq!(widget.borrow().day_tiles()[4].day, 1);

    store.write_i32(CALENDAR_DOMAIN, VIEW_GROUP, "ShowDaysOfWeek", 0);
    assert!(!widget.borrow().is_showing_days_of_the_week());
    assert!(widget.borrow().tiles().day_label_row.is_none());

    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "FirstDayOfWeekend", "fri");
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "WeekendLength", "3");
    let widget = widget.borrow();
    assert_eq!(widget.settings().first_day_of_weekend, DayOfWeek::Friday);
    assert_eq!(widget.settings().weekend_length, 3);
    // Monday-first columns: Friday, Saturday and Sunday are 4, 5 and 6.
    let weekend: Vec<bool> = widget.day_tiles()[..7]
        .iter()
        .map(|tile| tile.flags.is_weekend)
        .collect();
    assert_eq!(weekend, vec![false, false, false, false, true, true, true]);
}

#[test]
fn invalid_values_are_ignored() {
    let store = ConfigStore::new();
    let widget = shared_widget(&store);
    let before = widget.borrow().settings();

    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "FirstDayOfWeek", "Blursday");
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "ShowGrid", "maybe");
    store.write_i32(CALENDAR_DOMAIN, VIEW_GROUP, "FirstDayOfWeekend", 9);
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "WeekendLength", "lots");

    assert_eq!(widget.borrow().settings(), before);
}

#[test]
fn other_domains_and_groups_are_ignored() {
    let store = ConfigStore::new();
    let widget = shared_widget(&store);
    let before = widget.borrow().settings();

    store.write_string("Clock", VIEW_GROUP, "FirstDayOfWeek", "Monday");
    store.write_string(CALENDAR_DOMAIN, "Window", "FirstDayOfWeek", "Monday");
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "UnknownKey", "1");

    assert_eq!(widget.borrow().settings(), before);
}

#[test]
fn subscription_ends_with_the_widget() {
    let store = ConfigStore::new();
    let widget = shared_widget(&store);
    assert_eq!(store.subscriber_count(), 1);

    drop(widget);
    assert_eq!(store.subscriber_count(), 0);
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "ShowGrid", "false");
}

#[test]
fn detach_stops_updates() {
    let store = ConfigStore::new();
    let widget = shared_widget(&store);
    widget.borrow_mut().detach_config();
    assert!(!widget.borrow().has_config_subscription());

    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "ShowGrid", "false");
    assert!(widget.borrow().settings().show_grid);
}

#[test]
fn weekend_length_is_clamped_when_applied() {
    let mut settings = CalendarSettings::default();
    assert!(apply_config_i32(
        &mut settings,
        CalendarConfigKey::WeekendLength,
        12
    ));
    assert_eq!(settings.weekend_length, 7);
    assert!(apply_config_string(
        &mut settings,
        CalendarConfigKey::WeekendLength,
        "-4"
    ));
    assert_eq!(settings.weekend_length, 0);
}

#[test]
fn unchanged_values_report_no_change() {
    let mut settings = CalendarSettings::default();
    assert!(!apply_config_string(
        &mut settings,
        CalendarConfigKey::ShowGrid,
        "true"
    ));
    assert!(!apply_config_i32(
        &mut settings,
        CalendarConfigKey::FirstDayOfWeek,
        0
    ));
}

#[test]
fn settings_from_store_overlays_present_keys_only() {
    let store = ConfigStore::new();
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "ShowYear", "1");
    let base = CalendarSettings {
        show_grid: false,
        ..CalendarSettings::default()
    };
    let settings = settings_from_store(&store, base);
    assert!(settings.show_year);
    assert!(!settings.show_grid);
}

#[test]
fn store_reads_convert_between_representations() {
    let store = ConfigStore::new();
    store.write_i32(CALENDAR_DOMAIN, VIEW_GROUP, "WeekendLength", 2);
    store.write_string(CALENDAR_DOMAIN, VIEW_GROUP, "ShowGrid", " 0 ");

    assert_eq!(
        store.read_string(CALENDAR_DOMAIN, VIEW_GROUP, "WeekendLength", ""),
        "2"
    );
    assert_eq!(store.read_i32(CALENDAR_DOMAIN, VIEW_GROUP, "ShowGrid", 7), 0);
    assert_eq!(store.read_i32(CALENDAR_DOMAIN, VIEW_GROUP, "Missing", 7), 7);
}
