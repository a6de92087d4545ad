use serde::{Deserialize, Serialize};

/// Pointer position in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntSize {
    pub width: u32,
    pub height: u32,
}

impl IntSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle; `x..x+width` is half-open, like every hit test here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl IntRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn from_size(size: IntSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[must_use]
    pub fn size(self) -> IntSize {
        IntSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    #[must_use]
    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    #[must_use]
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn contains(self, point: IntPoint) -> bool {
        let x = i64::from(point.x);
        let y = i64::from(point.y);
        x >= i64::from(self.x) && x < self.right() && y >= i64::from(self.y) && y < self.bottom()
    }

    #[must_use]
    pub fn intersects(self, other: IntRect) -> bool {
        i64::from(self.x) < other.right()
            && i64::from(other.x) < self.right()
            && i64::from(self.y) < other.bottom()
            && i64::from(other.y) < self.bottom()
    }

    /// Removes `amount` pixels from the top edge, saturating at zero height.
    #[must_use]
    pub fn shrink_top(self, amount: u32) -> Self {
        let amount = amount.min(self.height);
        Self::new(
            self.x,
            self.y.saturating_add_unsigned(amount),
            self.width,
            self.height - amount,
        )
    }

    /// Splits `total` into `count` cells; the last cell absorbs the remainder.
    ///
    /// Returns `(offset, extent)` for cell `index`. An index past the last
    /// cell collapses to an empty cell at the far edge.
    #[must_use]
    pub fn split_axis(total: u32, count: u32, index: u32) -> (u32, u32) {
        if count == 0 {
            return (0, 0);
        }
        if index >= count {
            return (total, 0);
        }
        let base = total / count;
        let remainder = total % count;
        let offset = base * index;
        let extent = if index + 1 == count {
            base + remainder
        } else {
            base
        };
        (offset, extent)
    }

    /// Cell `(column, row)` of a `columns × rows` grid spanning this rect.
    #[must_use]
    pub fn grid_cell(self, columns: u32, rows: u32, column: u32, row: u32) -> Self {
        let (dx, width) = Self::split_axis(self.width, columns, column);
        let (dy, height) = Self::split_axis(self.height, rows, row);
        Self::new(
            self.x.saturating_add_unsigned(dx),
            self.y.saturating_add_unsigned(dy),
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{IntPoint, IntRect};

    #[test]
    fn split_axis_gives_remainder_to_last_cell() {
        assert_eq!(IntRect::split_axis(100, 7, 0), (0, 14));
        assert_eq!(IntRect::split_axis(100, 7, 5), (70, 14));
        assert_eq!(IntRect::split_axis(100, 7, 6), (84, 16));
        assert_eq!(IntRect::split_axis(5, 0, 0), (0, 0));
    }

    #[test]
    fn split_axis_keeps_stray_indices_inside_the_total() {
        assert_eq!(IntRect::split_axis(u32::MAX, 1, 11), (u32::MAX, 0));
        assert_eq!(IntRect::split_axis(100, 7, 7), (100, 0));
        let cell = IntRect::new(0, 0, 300, 200).grid_cell(1, 1, 0, 5);
        assert_eq!(cell, IntRect::new(0, 200, 300, 0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = IntRect::new(10, 10, 5, 5);
        assert!(rect.contains(IntPoint::new(10, 10)));
        assert!(rect.contains(IntPoint::new(14, 14)));
        assert!(!rect.contains(IntPoint::new(15, 12)));
        assert!(!rect.contains(IntPoint::new(12, 15)));
        assert!(!IntRect::new(0, 0, 0, 0).contains(IntPoint::new(0, 0)));
    }

    #[test]
    fn shrink_top_saturates_at_zero_height() {
        let rect = IntRect::new(0, 4, 20, 10).shrink_top(16);
        assert_eq!(rect, IntRect::new(0, 14, 20, 0));
    }
}
