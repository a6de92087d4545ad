use chrono::{Datelike, NaiveDate};

use crate::core::{DayOfWeek, IntRect};

/// Slots in one day grid: six weeks of seven days.
pub const DAY_GRID_SLOTS: usize = 42;
pub const MONTHS_PER_YEAR: usize = 12;
const ARENA_SLOTS: usize = DAY_GRID_SLOTS * MONTHS_PER_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayTileFlags {
    pub is_today: bool,
    pub is_selected: bool,
    pub is_hovered: bool,
    pub is_being_pressed: bool,
    pub is_outside_view_month: bool,
    pub is_weekend: bool,
}

/// One day cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayTile {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub rect: IntRect,
    pub flags: DayTileFlags,
}

impl DayTile {
    #[must_use]
    pub fn is_date(&self, date: NaiveDate) -> bool {
        self.year == date.year() && self.month == date.month() && self.day == date.day()
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthTileFlags {
    pub is_hovered: bool,
    pub is_being_pressed: bool,
}

/// One month cell of the Year mode grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthTile {
    pub month: u32,
    pub name: &'static str,
    pub rect: IntRect,
    pub flags: MonthTileFlags,
}

/// Day-of-week header label, already sized for the current column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLabel {
    pub day: DayOfWeek,
    pub name: &'static str,
    pub measured_width: u32,
    pub height: u32,
}

/// Fixed store of twelve 42-slot day grids addressed by `(month_index, slot)`.
///
/// Month mode only populates bucket 0; Year mode fills one bucket per month
/// for the mini calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileArena {
    slots: Box<[DayTile; ARENA_SLOTS]>,
}

impl Default for TileArena {
    fn default() -> Self {
        Self {
            slots: Box::new([DayTile::default(); ARENA_SLOTS]),
        }
    }
}

impl TileArena {
    #[must_use]
    pub fn get(&self, month_index: usize, slot: usize) -> Option<&DayTile> {
        if month_index >= MONTHS_PER_YEAR || slot >= DAY_GRID_SLOTS {
            return None;
        }
        self.slots.get(month_index * DAY_GRID_SLOTS + slot)
    }

    /// The 42 tiles of `month_index`; empty when the index is out of range.
    #[must_use]
    pub fn bucket(&self, month_index: usize) -> &[DayTile] {
        if month_index >= MONTHS_PER_YEAR {
            return &[];
        }
        let start = month_index * DAY_GRID_SLOTS;
        &self.slots[start..start + DAY_GRID_SLOTS]
    }

    pub fn bucket_mut(&mut self, month_index: usize) -> &mut [DayTile] {
        if month_index >= MONTHS_PER_YEAR {
            return &mut [];
        }
        let start = month_index * DAY_GRID_SLOTS;
        &mut self.slots[start..start + DAY_GRID_SLOTS]
    }

    pub fn store(&mut self, month_index: usize, tiles: &[DayTile; DAY_GRID_SLOTS]) {
        if month_index < MONTHS_PER_YEAR {
            self.bucket_mut(month_index).copy_from_slice(tiles);
        }
    }

    pub fn clear(&mut self) {
        self.slots.fill(DayTile::default());
    }
}

#[cfg(test)]
mod tests {
    use super::{DAY_GRID_SLOTS, DayTile, MONTHS_PER_YEAR, TileArena};

    #[test]
    fn buckets_are_independent() {
        let mut arena = TileArena::default();
        let mut grid = [DayTile::default(); DAY_GRID_SLOTS];
        grid[3].day = 9;
        arena.store(2, &grid);

        assert_eq!(arena.get(2, 3).map(|tile| tile.day), Some(9));
        assert_eq!(arena.get(1, 3).map(|tile| tile.day), Some(0));
        assert!(arena.get(2, DAY_GRID_SLOTS).is_none());

        arena.clear();
        assert_eq!(arena.get(2, 3).map(|tile| tile.day), Some(0));
    }

    #[test]
    fn out_of_range_months_are_ignored() {
        let mut arena = TileArena::default();
        arena.store(MONTHS_PER_YEAR, &[DayTile::default(); DAY_GRID_SLOTS]);
        assert!(arena.bucket(MONTHS_PER_YEAR).is_empty());
        assert!(arena.bucket_mut(MONTHS_PER_YEAR + 3).is_empty());
    }
}
