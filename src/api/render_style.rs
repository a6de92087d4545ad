use crate::error::{CalendarError, CalendarResult};
use crate::render::Color;

/// Colors used when building a calendar frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarPalette {
    pub background: Color,
    pub tile: Color,
    pub weekend_tile: Color,
    pub outside_tile: Color,
    pub hovered_tile: Color,
    pub pressed_tile: Color,
    pub selected_tile: Color,
    pub today_tile: Color,
    pub text: Color,
    pub outside_text: Color,
    pub selected_text: Color,
    pub header_text: Color,
    pub grid_line: Color,
    pub grid_line_width: f64,
}

impl Default for CalendarPalette {
    fn default() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            tile: Color::rgb(1.0, 1.0, 1.0),
            weekend_tile: Color::rgb(0.96, 0.96, 0.96),
            outside_tile: Color::rgb(0.93, 0.93, 0.93),
            hovered_tile: Color::rgb(0.87, 0.91, 0.98),
            pressed_tile: Color::rgb(0.74, 0.82, 0.95),
            selected_tile: Color::rgb(0.20, 0.40, 0.80),
            today_tile: Color::rgb(0.99, 0.93, 0.70),
            text: Color::rgb(0.0, 0.0, 0.0),
            outside_text: Color::rgb(0.55, 0.55, 0.55),
            selected_text: Color::rgb(1.0, 1.0, 1.0),
            header_text: Color::rgb(0.10, 0.10, 0.10),
            grid_line: Color::rgb(0.75, 0.75, 0.75),
            grid_line_width: 1.0,
        }
    }
}

impl CalendarPalette {
    pub fn validate(self) -> CalendarResult<Self> {
        for color in [
            self.background,
            self.tile,
            self.weekend_tile,
            self.outside_tile,
            self.hovered_tile,
            self.pressed_tile,
            self.selected_tile,
            self.today_tile,
            self.text,
            self.outside_text,
            self.selected_text,
            self.header_text,
            self.grid_line,
        ] {
            color.validate()?;
        }
        if !self.grid_line_width.is_finite() || self.grid_line_width <= 0.0 {
            return Err(CalendarError::InvalidFrame(
                "grid line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
