use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::core::{CalendarMode, IntPoint, ViewCoordinate};
use crate::extensions::CalendarEvent;
use crate::interaction::hit_test;
use crate::render::Renderer;

use super::CalendarWidget;

impl<R: Renderer> CalendarWidget<R> {
    /// Moves the hover highlight to the tile under `position`.
    pub fn pointer_move(&mut self, position: IntPoint) {
        match self.mode {
            CalendarMode::Month => {
                self.interaction
                    .on_pointer_move(self.tiles.day_tiles_mut(), position);
            }
            CalendarMode::Year => {
                self.interaction
                    .on_pointer_move(self.tiles.month_tiles_mut(), position);
            }
        }
    }

    pub fn pointer_down(&mut self, position: IntPoint) {
        let pressed = match self.mode {
            CalendarMode::Month => self
                .interaction
                .on_pointer_down(self.tiles.day_tiles_mut(), position),
            CalendarMode::Year => self
                .interaction
                .on_pointer_down(self.tiles.month_tiles_mut(), position),
        };
        debug!(?pressed, "pointer down");
    }

    /// Completes a press; releasing over the pressed tile counts as a click.
    pub fn pointer_up(&mut self, position: IntPoint) {
        match self.mode {
            CalendarMode::Month => {
                let clicked = self
                    .interaction
                    .on_pointer_up(self.tiles.day_tiles_mut(), position);
                if let Some(index) = clicked {
                    self.click_day_tile(index);
                }
            }
            CalendarMode::Year => {
                let clicked = self
                    .interaction
                    .on_pointer_up(self.tiles.month_tiles_mut(), position);
                if let Some(index) = clicked {
                    self.click_month_tile(index);
                }
            }
        }
    }

    /// Notifies a double click on a day tile; selection was already set by
    /// the click that preceded it.
    pub fn double_click(&mut self, position: IntPoint) {
        if self.mode != CalendarMode::Month {
            return;
        }
        if hit_test(self.tiles.day_tiles(), position).is_some() {
            self.emit_event(CalendarEvent::TileDoubleClick);
        }
    }

    /// Clears hover and press without notifying anyone.
    pub fn pointer_leave(&mut self) {
        match self.mode {
            CalendarMode::Month => self.interaction.on_pointer_leave(self.tiles.day_tiles_mut()),
            CalendarMode::Year => self
                .interaction
                .on_pointer_leave(self.tiles.month_tiles_mut()),
        }
    }

    /// Pages forward on a positive delta and back on a negative one.
    ///
    /// A zero delta does nothing and raises no event.
    pub fn wheel(&mut self, delta: i32) {
        match delta.cmp(&0) {
            Ordering::Greater => self.show_next_date(),
            Ordering::Less => self.show_previous_date(),
            Ordering::Equal => return,
        }
        self.emit_event(CalendarEvent::Scroll);
    }

    fn click_day_tile(&mut self, index: usize) {
        let Some(tile) = self.tiles.day_tiles().get(index).copied() else {
            return;
        };
        let Some(date) = tile.date() else {
            warn!(
                year = tile.year,
                month = tile.month,
                day = tile.day,
                "clicked tile has no representable date"
            );
            return;
        };
        self.set_selected_date(date);
        self.emit_event(CalendarEvent::TileClick);
    }

    fn click_month_tile(&mut self, index: usize) {
        let Some(month) = self.tiles.month_tiles().get(index).map(|tile| tile.month) else {
            return;
        };
        self.mode = CalendarMode::Month;
        self.set_view(ViewCoordinate {
            year: self.view.year,
            month,
        });
        self.emit_event(CalendarEvent::MonthClick);
    }
}
