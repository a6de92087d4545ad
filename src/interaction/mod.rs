mod events;

pub use events::{
    CalendarEventHandler, PointerButton, PointerEvent, ResizeEvent, WheelEvent, WidgetEvent,
};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{IntPoint, IntRect};
use crate::layout::{DayTile, MonthTile};

/// Pointer session of the press-then-release click protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerSession {
    #[default]
    Idle,
    Pressed { index: usize },
}

/// Tile flags touched by pointer tracking.
pub trait InteractiveTile {
    fn rect(&self) -> IntRect;
    fn is_hovered(&self) -> bool;
    fn set_hovered(&mut self, hovered: bool);
    fn set_being_pressed(&mut self, pressed: bool);
}

impl InteractiveTile for DayTile {
    fn rect(&self) -> IntRect {
        self.rect
    }

    fn is_hovered(&self) -> bool {
        self.flags.is_hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.flags.is_hovered = hovered;
    }

    fn set_being_pressed(&mut self, pressed: bool) {
        self.flags.is_being_pressed = pressed;
    }
}

impl InteractiveTile for MonthTile {
    fn rect(&self) -> IntRect {
        self.rect
    }

    fn is_hovered(&self) -> bool {
        self.flags.is_hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.flags.is_hovered = hovered;
    }

    fn set_being_pressed(&mut self, pressed: bool) {
        self.flags.is_being_pressed = pressed;
    }
}

/// Index of the tile under `position`, if any.
#[must_use]
pub fn hit_test<T: InteractiveTile>(tiles: &[T], position: IntPoint) -> Option<usize> {
    tiles.iter().position(|tile| tile.rect().contains(position))
}

/// Hover/press tracking over the authoritative tile collection.
///
/// The tiles themselves carry the flags; this type only remembers the
/// pressed index and the last pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    session: PointerSession,
    pointer: Option<IntPoint>,
}

impl InteractionState {
    #[must_use]
    pub fn session(self) -> PointerSession {
        self.session
    }

    #[must_use]
    pub fn pressed_index(self) -> Option<usize> {
        match self.session {
            PointerSession::Idle => None,
            PointerSession::Pressed { index } => Some(index),
        }
    }

    #[must_use]
    pub fn pointer(self) -> Option<IntPoint> {
        self.pointer
    }

    /// Moves the hover flag to the tile under `position`.
    pub fn on_pointer_move<T: InteractiveTile>(
        &mut self,
        tiles: &mut [T],
        position: IntPoint,
    ) -> Option<usize> {
        self.pointer = Some(position);
        let hit = hit_test(tiles, position);
        for (index, tile) in tiles.iter_mut().enumerate() {
            tile.set_hovered(Some(index) == hit);
        }
        trace!(x = position.x, y = position.y, ?hit, "pointer hover");
        hit
    }

    /// Starts a press on the tile under `position`; a miss leaves the session idle.
    pub fn on_pointer_down<T: InteractiveTile>(
        &mut self,
        tiles: &mut [T],
        position: IntPoint,
    ) -> Option<usize> {
        self.pointer = Some(position);
        self.clear_pressed(tiles);
        let hit = hit_test(tiles, position)?;
        tiles[hit].set_being_pressed(true);
        self.session = PointerSession::Pressed { index: hit };
        Some(hit)
    }

    /// Ends the press; returns the clicked index when release hits the pressed tile.
    pub fn on_pointer_up<T: InteractiveTile>(
        &mut self,
        tiles: &mut [T],
        position: IntPoint,
    ) -> Option<usize> {
        self.pointer = Some(position);
        let pressed = self.pressed_index();
        self.clear_pressed(tiles);
        let released = hit_test(tiles, position);
        match (pressed, released) {
            (Some(pressed), Some(released)) if pressed == released => Some(released),
            _ => None,
        }
    }

    /// Cancels hover and press without producing a click.
    pub fn on_pointer_leave<T: InteractiveTile>(&mut self, tiles: &mut [T]) {
        self.pointer = None;
        self.clear_pressed(tiles);
        for tile in tiles.iter_mut() {
            tile.set_hovered(false);
        }
    }

    /// Re-derives hover for a freshly laid out tile set and drops any press.
    pub fn resync<T: InteractiveTile>(&mut self, tiles: &mut [T]) {
        self.session = PointerSession::Idle;
        let hit = self.pointer.and_then(|position| hit_test(tiles, position));
        for (index, tile) in tiles.iter_mut().enumerate() {
            tile.set_hovered(Some(index) == hit);
            tile.set_being_pressed(false);
        }
    }

    fn clear_pressed<T: InteractiveTile>(&mut self, tiles: &mut [T]) {
        if let PointerSession::Pressed { index } = self.session {
            if let Some(tile) = tiles.get_mut(index) {
                tile.set_being_pressed(false);
            }
        }
        self.session = PointerSession::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionState, PointerSession};
    use crate::core::{IntPoint, IntRect};
    use crate::layout::MonthTile;

    fn row_of_tiles() -> Vec<MonthTile> {
        (0..3)
            .map(|index| MonthTile {
                month: index + 1,
                rect: IntRect::new(index as i32 * 10, 0, 10, 10),
                ..MonthTile::default()
            })
            .collect()
    }

    #[test]
    fn press_on_empty_space_stays_idle() {
        let mut tiles = row_of_tiles();
        let mut state = InteractionState::default();
        assert_eq!(state.on_pointer_down(&mut tiles, IntPoint::new(50, 5)), None);
        assert_eq!(state.session(), PointerSession::Idle);
        assert_eq!(state.on_pointer_up(&mut tiles, IntPoint::new(50, 5)), None);
    }

    #[test]
    fn tile_edges_are_half_open() {
        let mut tiles = row_of_tiles();
        let mut state = InteractionState::default();
        assert_eq!(state.on_pointer_move(&mut tiles, IntPoint::new(10, 0)), Some(1));
        assert_eq!(state.on_pointer_move(&mut tiles, IntPoint::new(9, 9)), Some(0));
    }

    #[test]
    fn resync_keeps_hover_and_drops_press() {
        let mut tiles = row_of_tiles();
        let mut state = InteractionState::default();
        state.on_pointer_down(&mut tiles, IntPoint::new(15, 5));

        let mut fresh = row_of_tiles();
        state.resync(&mut fresh);
        assert_eq!(state.pressed_index(), None);
        assert!(fresh[1].flags.is_hovered);
        assert!(!fresh[1].flags.is_being_pressed);
        assert_eq!(state.on_pointer_up(&mut fresh, IntPoint::new(15, 5)), None);
    }
}
