//! Drag-gesture interpretation.
//!
//! A drag turns into at most one move. Once either axis of the
//! displacement passes the threshold, the drag counts as a move when the
//! empty slot lies in the drag direction on the tile's row (horizontal
//! drag) or column (vertical drag). After a move fires the gesture is
//! spent; further movement does nothing until the next drag starts.

use serde::{Deserialize, Serialize};

use super::board::{Board, TileId};
use super::slot::{Direction, Slot};

/// Direction a drag of (`dx`, `dy`) on the tile at `tile` asks for, given
/// the empty slot. `None` below the threshold or away from the empty slot.
///
/// Screen coordinates: positive `dx` is right, positive `dy` is down.
#[must_use]
pub fn drag_direction(tile: Slot, empty: Slot, dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    if !(dx.abs() > threshold || dy.abs() > threshold) {
        return None;
    }

    if tile.row() == empty.row() {
        if dx > threshold && empty.col() > tile.col() {
            return Some(Direction::Right);
        }
        if dx < -threshold && empty.col() < tile.col() {
            return Some(Direction::Left);
        }
    }
    if tile.col() == empty.col() {
        if dy > threshold && empty.row() > tile.row() {
            return Some(Direction::Down);
        }
        if dy < -threshold && empty.row() < tile.row() {
            return Some(Direction::Up);
        }
    }
    None
}

/// Where a drag started and on which tile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragOrigin {
    pub tile: TileId,
    pub x: f32,
    pub y: f32,
}

/// Tracks one drag at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureInterpreter {
    threshold: f32,
    origin: Option<DragOrigin>,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self { threshold, origin: None }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn origin(&self) -> Option<DragOrigin> {
        self.origin
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Start tracking a drag, replacing any drag in progress.
    pub fn begin(&mut self, tile: TileId, x: f32, y: f32) {
        self.origin = Some(DragOrigin { tile, x, y });
    }

    /// Feed the pointer position. Returns the tile to move once the drag
    /// qualifies, clearing the gesture.
    pub fn update(&mut self, board: &Board, x: f32, y: f32) -> Option<TileId> {
        let origin = self.origin?;
        let tile = board.tile(origin.tile)?;
        drag_direction(tile.slot(), board.empty_slot(), x - origin.x, y - origin.y, self.threshold)?;
        self.origin = None;
        Some(origin.tile)
    }

    /// Drop the drag in progress without moving.
    pub fn end(&mut self) {
        self.origin = None;
    }
}
