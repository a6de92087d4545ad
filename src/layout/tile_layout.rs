use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    CalendarMath, CalendarMode, DayNameStyle, IntRect, IntSize, ViewCoordinate, days_in_month,
    month_name,
};

use super::day_labels::{DAY_LABEL_HEIGHT, DayLabels, build_day_labels};
use super::settings::CalendarSettings;
use super::tiles::{
    DAY_GRID_SLOTS, DayTile, DayTileFlags, MONTHS_PER_YEAR, MonthTile, MonthTileFlags, TileArena,
};

pub const GRID_COLUMNS: u32 = 7;
pub const GRID_ROWS: u32 = 6;
/// Height of the month/year title band.
pub const HEADER_HEIGHT: u32 = 24;
/// Height of the month name band above each mini calendar in Year mode.
pub const MINI_MONTH_TITLE_HEIGHT: u32 = 16;
pub const MIN_TITLE_WIDTH: u32 = 160;
pub const MIN_TITLE_HEIGHT: u32 = 130;
pub const MIN_GRID_TILE_EXTENT: u32 = 30;

/// Chrome actually shown after fitting the configured flags to the widget size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolvedChrome {
    pub show_grid: bool,
    pub show_year: bool,
    pub show_month_and_year: bool,
    pub show_days_of_week: bool,
}

/// Dates that receive the today/selected markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarks {
    pub today: NaiveDate,
    pub selected: NaiveDate,
}

/// Complete, freshly computed tile state for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    pub mode: CalendarMode,
    pub view: ViewCoordinate,
    pub chrome: ResolvedChrome,
    pub header: Option<IntRect>,
    pub day_label_row: Option<IntRect>,
    pub grid: IntRect,
    pub unadjusted_tile_size: IntSize,
    pub day_labels: DayLabels,
    pub arena: TileArena,
    pub months: [MonthTile; MONTHS_PER_YEAR],
}

impl TileSet {
    /// Selectable day tiles; empty in Year mode.
    #[must_use]
    pub fn day_tiles(&self) -> &[DayTile] {
        match self.mode {
            CalendarMode::Month => self.arena.bucket(0),
            CalendarMode::Year => &[],
        }
    }

    pub fn day_tiles_mut(&mut self) -> &mut [DayTile] {
        match self.mode {
            CalendarMode::Month => self.arena.bucket_mut(0),
            CalendarMode::Year => &mut [],
        }
    }

    /// Selectable month tiles; empty in Month mode.
    #[must_use]
    pub fn month_tiles(&self) -> &[MonthTile] {
        match self.mode {
            CalendarMode::Month => &[],
            CalendarMode::Year => &self.months,
        }
    }

    pub fn month_tiles_mut(&mut self) -> &mut [MonthTile] {
        match self.mode {
            CalendarMode::Month => &mut [],
            CalendarMode::Year => &mut self.months,
        }
    }

    /// Mini calendar of month `month_index` (0-based) in Year mode.
    #[must_use]
    pub fn mini_month(&self, month_index: usize) -> &[DayTile] {
        match self.mode {
            CalendarMode::Month => &[],
            CalendarMode::Year => self.arena.bucket(month_index),
        }
    }
}

/// Turns a view coordinate, mode and widget size into tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayoutEngine {
    settings: CalendarSettings,
    math: CalendarMath,
}

impl TileLayoutEngine {
    /// Settings are taken as given; a year grid that cannot hold twelve
    /// months leaves the surplus months as empty tiles on the grid's edge.
    /// `CalendarSettings::validate` rejects such shapes up front.
    #[must_use]
    pub fn new(settings: CalendarSettings) -> Self {
        Self {
            settings,
            math: settings.calendar_math(),
        }
    }

    #[must_use]
    pub fn math(&self) -> CalendarMath {
        self.math
    }

    #[must_use]
    pub fn layout(
        &self,
        mode: CalendarMode,
        view: ViewCoordinate,
        size: IntSize,
        marks: DayMarks,
    ) -> TileSet {
        match mode {
            CalendarMode::Month => self.layout_month(view, size, marks),
            CalendarMode::Year => self.layout_year(view, size, marks),
        }
    }

    #[must_use]
    pub fn resolve_chrome(&self, mode: CalendarMode, size: IntSize) -> ResolvedChrome {
        let settings = self.settings;
        let mut chrome = ResolvedChrome {
            show_grid: settings.show_grid,
            show_year: settings.show_year,
            show_month_and_year: settings.show_month_and_year,
            show_days_of_week: settings.show_days_of_week,
        };
        if !settings.auto_adjust_chrome {
            return chrome;
        }

        match mode {
            CalendarMode::Month => {
                chrome.show_year = false;
                if size.width < MIN_TITLE_WIDTH || size.height < MIN_TITLE_HEIGHT {
                    chrome.show_month_and_year = false;
                }
                let (grid, _, _) = split_month_chrome(IntRect::from_size(size), chrome);
                let tile = unadjusted_cell_size(grid, GRID_COLUMNS, GRID_ROWS);
                if tile.width < MIN_GRID_TILE_EXTENT || tile.height < MIN_GRID_TILE_EXTENT {
                    chrome.show_grid = false;
                }
            }
            CalendarMode::Year => {
                chrome.show_year = true;
                chrome.show_month_and_year = false;
                chrome.show_days_of_week = false;
            }
        }
        chrome
    }

    /// Month mode: 42 day tiles under the optional title and day-label rows.
    #[must_use]
    pub fn layout_month(&self, view: ViewCoordinate, size: IntSize, marks: DayMarks) -> TileSet {
        let chrome = self.resolve_chrome(CalendarMode::Month, size);
        let (grid, header, day_label_row) = split_month_chrome(IntRect::from_size(size), chrome);
        let unadjusted_tile_size = unadjusted_cell_size(grid, GRID_COLUMNS, GRID_ROWS);

        let mut arena = TileArena::default();
        arena.store(0, &self.day_grid(view, grid, marks));
        trace!(%view, ?grid, ?unadjusted_tile_size, "month tiles laid out");

        TileSet {
            mode: CalendarMode::Month,
            view,
            chrome,
            header,
            day_label_row,
            grid,
            unadjusted_tile_size,
            day_labels: build_day_labels(
                self.math,
                DayNameStyle::for_tile_width(unadjusted_tile_size.width),
            ),
            arena,
            months: self.month_grid(IntRect::default()),
        }
    }

    /// Year mode: twelve month tiles, each carrying a mini day grid in the arena.
    #[must_use]
    pub fn layout_year(&self, view: ViewCoordinate, size: IntSize, marks: DayMarks) -> TileSet {
        let chrome = self.resolve_chrome(CalendarMode::Year, size);
        let area = IntRect::from_size(size);
        let (grid, header) = if chrome.show_year {
            (area.shrink_top(HEADER_HEIGHT), Some(band(area, HEADER_HEIGHT)))
        } else {
            (area, None)
        };
        let shape = self.settings.year_grid;
        let months = self.month_grid(grid);

        let mut arena = TileArena::default();
        for (index, month) in months.iter().enumerate() {
            let coordinate = ViewCoordinate {
                year: view.year,
                month: month.month,
            };
            let mini_grid = month.rect.shrink_top(MINI_MONTH_TITLE_HEIGHT);
            arena.store(index, &self.day_grid(coordinate, mini_grid, marks));
        }
        trace!(year = view.year, ?grid, "year tiles laid out");

        let unadjusted_tile_size = unadjusted_cell_size(grid, shape.columns, shape.rows);
        let mini_tile_width = unadjusted_tile_size.width / GRID_COLUMNS;
        TileSet {
            mode: CalendarMode::Year,
            view,
            chrome,
            header,
            day_label_row: None,
            grid,
            unadjusted_tile_size,
            day_labels: build_day_labels(self.math, DayNameStyle::for_tile_width(mini_tile_width)),
            arena,
            months,
        }
    }

    /// The 42-slot grid for `view` spread over `grid`.
    ///
    /// Slots before the first of the month hold the previous month's trailing
    /// days, slots after its last day hold the next month's leading days.
    #[must_use]
    pub fn day_grid(
        &self,
        view: ViewCoordinate,
        grid: IntRect,
        marks: DayMarks,
    ) -> [DayTile; DAY_GRID_SLOTS] {
        let leading = self.math.day_of_week_index(view.year, view.month, 1);
        let days = days_in_month(view.year, view.month);
        let previous = view.adjacent(-1);
        let next = view.adjacent(1);
        let previous_days = days_in_month(previous.year, previous.month);

        let mut tiles = [DayTile::default(); DAY_GRID_SLOTS];
        for (slot, tile) in (0u32..).zip(tiles.iter_mut()) {
            let (coordinate, day, outside) = if slot < leading {
                (previous, previous_days - (leading - 1 - slot), true)
            } else if slot < leading + days {
                (view, slot - leading + 1, false)
            } else {
                (next, slot - leading - days + 1, true)
            };
            let column = slot % GRID_COLUMNS;
            let row = slot / GRID_COLUMNS;

            *tile = DayTile {
                year: coordinate.year,
                month: coordinate.month,
                day,
                rect: grid.grid_cell(GRID_COLUMNS, GRID_ROWS, column, row),
                flags: DayTileFlags {
                    is_outside_view_month: outside,
                    is_weekend: self.math.is_weekend_index(column),
                    ..DayTileFlags::default()
                },
            };
            tile.flags.is_today = tile.is_date(marks.today);
            tile.flags.is_selected = tile.is_date(marks.selected);
        }
        tiles
    }

    /// Month tiles for `view.year` laid out over `area`.
    #[must_use]
    pub fn month_grid(&self, area: IntRect) -> [MonthTile; MONTHS_PER_YEAR] {
        let shape = self.settings.year_grid;
        let mut months = [MonthTile::default(); MONTHS_PER_YEAR];
        for (index, tile) in (0u32..).zip(months.iter_mut()) {
            let rect = if shape.columns == 0 || area.area() == 0 {
                IntRect::default()
            } else {
                area.grid_cell(
                    shape.columns,
                    shape.rows,
                    index % shape.columns,
                    index / shape.columns,
                )
            };
            *tile = MonthTile {
                month: index + 1,
                name: month_name(index + 1),
                rect,
                flags: MonthTileFlags::default(),
            };
        }
        months
    }
}

fn band(area: IntRect, height: u32) -> IntRect {
    IntRect::new(area.x, area.y, area.width, height.min(area.height))
}

/// Splits the widget area into `(grid, header, day_label_row)`.
fn split_month_chrome(
    area: IntRect,
    chrome: ResolvedChrome,
) -> (IntRect, Option<IntRect>, Option<IntRect>) {
    let mut rest = area;
    let mut header = None;
    let mut day_label_row = None;
    if chrome.show_month_and_year {
        header = Some(band(rest, HEADER_HEIGHT));
        rest = rest.shrink_top(HEADER_HEIGHT);
    }
    if chrome.show_days_of_week {
        day_label_row = Some(band(rest, DAY_LABEL_HEIGHT));
        rest = rest.shrink_top(DAY_LABEL_HEIGHT);
    }
    (rest, header, day_label_row)
}

fn unadjusted_cell_size(area: IntRect, columns: u32, rows: u32) -> IntSize {
    if columns == 0 || rows == 0 {
        return IntSize::default();
    }
    IntSize::new(area.width / columns, area.height / rows)
}
