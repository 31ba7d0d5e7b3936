//! 8-tile sliding puzzle.
//!
//! Eight tiles on a 3x3 grid with one empty slot. A tile next to the empty
//! slot slides into it on tap or on a drag toward it. The puzzle is solved
//! when every tile is back on its home slot.

mod board;
mod engine;
mod gesture;
mod slot;
mod solver;

pub use board::{Board, BoardSnapshot, Tile, TileId};
pub use engine::{ElapsedTime, GameStatus, PuzzleEngine, PuzzleIntent, PuzzleView};
pub use gesture::{drag_direction, DragOrigin, GestureInterpreter};
pub use slot::{Direction, Slot, GRID_SIDE, SLOT_COUNT, TILE_COUNT};
pub use solver::solve;
