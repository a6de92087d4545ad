use calendar_rs::core::{FixedClock, IntSize};
use calendar_rs::extensions::{CalendarEvent, CalendarListener};
use calendar_rs::render::NullRenderer;
use calendar_rs::{CalendarError, CalendarWidget, CalendarWidgetConfig};
use chrono::NaiveDate;

struct NamedListener(&'static str);

impl CalendarListener for NamedListener {
    fn id(&self) -> &str {
        self.0
    }

    fn on_event(&mut self, _event: CalendarEvent) {}
}

fn widget() -> CalendarWidget<NullRenderer> {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    CalendarWidget::with_clock(
        NullRenderer::default(),
        CalendarWidgetConfig::new(IntSize::new(700, 640)),
        FixedClock(today),
    )
    .expect("widget init")
}

#[test]
fn listeners_register_and_unregister_by_id() {
    let mut widget = widget();
    widget
        .register_listener(Box::new(NamedListener("a")))
        .expect("register a");
    widget
        .register_listener(Box::new(NamedListener("b")))
        .expect("register b");

    assert_eq!(widget.listener_count(), 2);
    assert!(widget.has_listener("a"));
    assert!(widget.unregister_listener("a"));
    assert!(!widget.unregister_listener("a"));
    assert!(!widget.has_listener("a"));
    assert_eq!(widget.listener_count(), 1);
}

#[test]
fn duplicate_and_empty_ids_are_rejected() {
    let mut widget = widget();
    widget
        .register_listener(Box::new(NamedListener("a")))
        .expect("register a");

    let duplicate = widget.register_listener(Box::new(NamedListener("a")));
    assert!(matches!(duplicate, Err(CalendarError::InvalidListener(_))));
    let empty = widget.register_listener(Box::new(NamedListener("")));
    assert!(matches!(empty, Err(CalendarError::InvalidListener(_))));
    assert_eq!(widget.listener_count(), 1);
}
