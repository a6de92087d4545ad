use tracing::debug;

use crate::core::{CalendarMode, ViewCoordinate};
use crate::error::CalendarResult;
use crate::render::Renderer;

use super::CalendarWidget;

impl<R: Renderer> CalendarWidget<R> {
    /// Steps back one month (Month mode) or one year (Year mode).
    pub fn show_previous_date(&mut self) {
        self.step_view(-1);
    }

    /// Steps forward one month (Month mode) or one year (Year mode).
    pub fn show_next_date(&mut self) {
        self.step_view(1);
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn set_mode(&mut self, mode: CalendarMode) {
        if mode == self.mode {
            return;
        }
        debug!(from = ?self.mode, to = ?mode, "calendar mode changed");
        self.mode = mode;
        self.update_tiles();
    }

    /// Jumps straight to `(year, month)`.
    ///
    /// A month outside `1..=12` or a year outside the displayable range is
    /// rejected and leaves the view untouched.
    pub fn set_view_date(&mut self, year: i32, month: u32) -> CalendarResult<()> {
        let view = ViewCoordinate::try_new(year, month)?;
        self.set_view(view);
        Ok(())
    }

    /// Shows the month containing the clock's current date.
    pub fn show_today(&mut self) {
        let today = self.clock.today();
        self.set_view(ViewCoordinate::of_date(today));
    }

    pub(super) fn set_view(&mut self, view: ViewCoordinate) {
        debug!(from = %self.view, to = %view, "calendar view changed");
        self.view = view;
        self.update_tiles();
    }

    fn step_view(&mut self, direction: i32) {
        let view = match self.mode {
            CalendarMode::Month => self.view.add_months(direction),
            CalendarMode::Year => self.view.add_years(direction),
        };
        self.set_view(view);
    }
}
