use serde::{Deserialize, Serialize};

/// Notifications raised by tile interaction and wheel navigation.
///
/// Variants carry no payload: listeners read the selection and view back
/// through the widget accessors once the event handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarEvent {
    Scroll,
    TileClick,
    TileDoubleClick,
    MonthClick,
}

/// Registered observer of `CalendarEvent`s.
pub trait CalendarListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: CalendarEvent);
}
