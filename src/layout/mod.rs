//! Tile layout: turns `(view, mode, size)` into day and month tiles.
//!
//! Tile sets are always rebuilt from scratch; hover and press flags are the
//! only state written into an existing set.

mod day_labels;
mod settings;
mod tile_layout;
mod tiles;

pub use day_labels::{
    DAY_LABEL_FONT_SIZE_PX, DAY_LABEL_HEIGHT, DayLabels, build_day_labels,
    estimate_label_text_width_px,
};
pub use settings::{CalendarSettings, YearGridShape};
pub use tile_layout::{
    DayMarks, GRID_COLUMNS, GRID_ROWS, HEADER_HEIGHT, MIN_GRID_TILE_EXTENT, MIN_TITLE_HEIGHT,
    MIN_TITLE_WIDTH, MINI_MONTH_TITLE_HEIGHT, ResolvedChrome, TileLayoutEngine, TileSet,
};
pub use tiles::{
    DAY_GRID_SLOTS, DayLabel, DayTile, DayTileFlags, MONTHS_PER_YEAR, MonthTile, MonthTileFlags,
    TileArena,
};
