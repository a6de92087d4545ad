use crate::interaction::{
    CalendarEventHandler, PointerButton, PointerEvent, ResizeEvent, WheelEvent,
};
use crate::render::Renderer;

use super::CalendarWidget;

/// Only the primary button takes part in the click protocol.
impl<R: Renderer> CalendarEventHandler for CalendarWidget<R> {
    fn handle_pointer_move(&mut self, event: PointerEvent) {
        self.pointer_move(event.position);
    }

    fn handle_pointer_down(&mut self, event: PointerEvent) {
        if event.button == PointerButton::Primary {
            self.pointer_down(event.position);
        }
    }

    fn handle_pointer_up(&mut self, event: PointerEvent) {
        if event.button == PointerButton::Primary {
            self.pointer_up(event.position);
        }
    }

    fn handle_double_click(&mut self, event: PointerEvent) {
        if event.button == PointerButton::Primary {
            self.double_click(event.position);
        }
    }

    fn handle_wheel(&mut self, event: WheelEvent) {
        self.wheel(event.delta);
    }

    fn handle_leave(&mut self) {
        self.pointer_leave();
    }

    fn handle_resize(&mut self, event: ResizeEvent) {
        self.resize(event.size);
    }
}
