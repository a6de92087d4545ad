use serde::{Deserialize, Serialize};

use crate::core::{IntPoint, IntSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    /// Move events carry no button.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: IntPoint,
    pub button: PointerButton,
}

impl PointerEvent {
    #[must_use]
    pub fn primary(x: i32, y: i32) -> Self {
        Self {
            position: IntPoint::new(x, y),
            button: PointerButton::Primary,
        }
    }

    #[must_use]
    pub fn hover(x: i32, y: i32) -> Self {
        Self {
            position: IntPoint::new(x, y),
            button: PointerButton::None,
        }
    }
}

/// Wheel step; only the sign is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub delta: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub size: IntSize,
}

/// Tagged input delivered by the host's window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    PointerMove(PointerEvent),
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    DoubleClick(PointerEvent),
    Wheel(WheelEvent),
    Leave,
    Resize(ResizeEvent),
}

/// One entry point per event kind.
///
/// Hosts either call the typed handlers directly or feed tagged events
/// through `dispatch`.
pub trait CalendarEventHandler {
    fn handle_pointer_move(&mut self, event: PointerEvent);
    fn handle_pointer_down(&mut self, event: PointerEvent);
    fn handle_pointer_up(&mut self, event: PointerEvent);
    fn handle_double_click(&mut self, event: PointerEvent);
    fn handle_wheel(&mut self, event: WheelEvent);
    fn handle_leave(&mut self);
    fn handle_resize(&mut self, event: ResizeEvent);

    fn dispatch(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::PointerMove(event) => self.handle_pointer_move(event),
            WidgetEvent::PointerDown(event) => self.handle_pointer_down(event),
            WidgetEvent::PointerUp(event) => self.handle_pointer_up(event),
            WidgetEvent::DoubleClick(event) => self.handle_double_click(event),
            WidgetEvent::Wheel(event) => self.handle_wheel(event),
            WidgetEvent::Leave => self.handle_leave(),
            WidgetEvent::Resize(event) => self.handle_resize(event),
        }
    }
}
