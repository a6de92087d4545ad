use crate::core::{CalendarMode, IntRect};
use crate::error::CalendarResult;
use crate::layout::{
    DAY_LABEL_FONT_SIZE_PX, DayTile, GRID_COLUMNS, GRID_ROWS, MINI_MONTH_TITLE_HEIGHT, MonthTile,
};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{CalendarPalette, CalendarWidget, DateFormat};

const HEADER_FONT_SIZE_PX: f64 = 14.0;
const DAY_FONT_SIZE_PX: f64 = 12.0;
const MINI_DAY_FONT_SIZE_PX: f64 = 9.0;

impl<R: Renderer> CalendarWidget<R> {
    /// Builds the scene for the current tiles without painting it.
    pub fn build_render_frame(&self) -> CalendarResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.size);
        let palette = self.palette;
        frame.push_rect(fill(IntRect::from_size(self.size), palette.background));

        match self.mode {
            CalendarMode::Month => self.build_month_scene(&mut frame)?,
            CalendarMode::Year => self.build_year_scene(&mut frame)?,
        }
        Ok(frame)
    }

    pub fn render(&mut self) -> CalendarResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    fn build_month_scene(&self, frame: &mut RenderFrame) -> CalendarResult<()> {
        let palette = self.palette;
        let tiles = &self.tiles;

        if let Some(header) = tiles.header.filter(|_| tiles.chrome.show_month_and_year) {
            let title = self.formatted_date(DateFormat::LongMonthYear)?;
            push_centered_text(frame, title, header, HEADER_FONT_SIZE_PX, palette.header_text);
        }

        if let Some(row) = tiles.day_label_row.filter(|_| tiles.chrome.show_days_of_week) {
            for (column, label) in (0u32..).zip(tiles.day_labels.iter()) {
                let cell = row.grid_cell(GRID_COLUMNS, 1, column, 0);
                push_centered_text(
                    frame,
                    label.name,
                    cell,
                    DAY_LABEL_FONT_SIZE_PX,
                    palette.header_text,
                );
            }
        }

        for tile in tiles.day_tiles() {
            push_day_tile(frame, tile, &palette, DAY_FONT_SIZE_PX);
        }

        if tiles.chrome.show_grid {
            push_grid_lines(frame, tiles.grid, GRID_COLUMNS, GRID_ROWS, &palette);
        }
        Ok(())
    }

    fn build_year_scene(&self, frame: &mut RenderFrame) -> CalendarResult<()> {
        let palette = self.palette;
        let tiles = &self.tiles;

        if let Some(header) = tiles.header.filter(|_| tiles.chrome.show_year) {
            let title = self.formatted_date(DateFormat::YearOnly)?;
            push_centered_text(frame, title, header, HEADER_FONT_SIZE_PX, palette.header_text);
        }

        for (index, month) in tiles.month_tiles().iter().enumerate() {
            push_month_tile(frame, month, &palette);
            for tile in tiles.mini_month(index) {
                if !tile.flags.is_outside_view_month {
                    push_day_tile(frame, tile, &palette, MINI_DAY_FONT_SIZE_PX);
                }
            }
        }

        if tiles.chrome.show_grid {
            let shape = self.settings.year_grid;
            push_grid_lines(frame, tiles.grid, shape.columns, shape.rows, &palette);
        }
        Ok(())
    }
}

fn fill(rect: IntRect, color: Color) -> RectPrimitive {
    RectPrimitive::new(
        f64::from(rect.x),
        f64::from(rect.y),
        f64::from(rect.width),
        f64::from(rect.height),
        color,
    )
}

fn push_centered_text(
    frame: &mut RenderFrame,
    text: impl Into<String>,
    rect: IntRect,
    font_size_px: f64,
    color: Color,
) {
    let text = text.into();
    if text.is_empty() || rect.area() == 0 {
        return;
    }
    let x = f64::from(rect.x) + f64::from(rect.width) / 2.0;
    let y = f64::from(rect.y) + f64::from(rect.height) / 2.0;
    frame.push_text(TextPrimitive::new(
        text,
        x,
        y,
        font_size_px,
        color,
        TextHAlign::Center,
    ));
}

fn day_tile_fill(tile: &DayTile, palette: &CalendarPalette) -> Color {
    let flags = tile.flags;
    if flags.is_selected {
        palette.selected_tile
    } else if flags.is_being_pressed {
        palette.pressed_tile
    } else if flags.is_hovered {
        palette.hovered_tile
    } else if flags.is_today {
        palette.today_tile
    } else if flags.is_outside_view_month {
        palette.outside_tile
    } else if flags.is_weekend {
        palette.weekend_tile
    } else {
        palette.tile
    }
}

fn push_day_tile(frame: &mut RenderFrame, tile: &DayTile, palette: &CalendarPalette, font: f64) {
    if tile.rect.area() == 0 {
        return;
    }
    frame.push_rect(fill(tile.rect, day_tile_fill(tile, palette)));
    let text_color = if tile.flags.is_selected {
        palette.selected_text
    } else if tile.flags.is_outside_view_month {
        palette.outside_text
    } else {
        palette.text
    };
    push_centered_text(frame, tile.day.to_string(), tile.rect, font, text_color);
}

fn push_month_tile(frame: &mut RenderFrame, tile: &MonthTile, palette: &CalendarPalette) {
    if tile.rect.area() == 0 {
        return;
    }
    let background = if tile.flags.is_being_pressed {
        palette.pressed_tile
    } else if tile.flags.is_hovered {
        palette.hovered_tile
    } else {
        palette.tile
    };
    frame.push_rect(fill(tile.rect, background));
    let title = IntRect::new(
        tile.rect.x,
        tile.rect.y,
        tile.rect.width,
        MINI_MONTH_TITLE_HEIGHT.min(tile.rect.height),
    );
    push_centered_text(frame, tile.name, title, DAY_FONT_SIZE_PX, palette.header_text);
}

/// Interior separators of a `columns × rows` grid over `area`.
fn push_grid_lines(
    frame: &mut RenderFrame,
    area: IntRect,
    columns: u32,
    rows: u32,
    palette: &CalendarPalette,
) {
    if area.area() == 0 {
        return;
    }
    let left = f64::from(area.x);
    let top = f64::from(area.y);
    let right = area.right() as f64;
    let bottom = area.bottom() as f64;

    for column in 1..columns {
        let (offset, _) = IntRect::split_axis(area.width, columns, column);
        let x = left + f64::from(offset);
        frame.push_line(LinePrimitive::new(
            x,
            top,
            x,
            bottom,
            palette.grid_line_width,
            palette.grid_line,
        ));
    }
    for row in 1..rows {
        let (offset, _) = IntRect::split_axis(area.height, rows, row);
        let y = top + f64::from(offset);
        frame.push_line(LinePrimitive::new(
            left,
            y,
            right,
            y,
            palette.grid_line_width,
            palette.grid_line,
        ));
    }
}
