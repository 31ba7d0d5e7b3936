//! Grid positions.
//!
//! The board is a 3x3 grid of slots numbered row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Side length of the square grid.
pub const GRID_SIDE: u8 = 3;

/// Number of slots on the board.
pub const SLOT_COUNT: usize = (GRID_SIDE * GRID_SIDE) as usize;

/// Number of tiles (every slot but one is occupied).
pub const TILE_COUNT: usize = SLOT_COUNT - 1;

/// One of the four orthogonal directions on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in neighbor-enumeration order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A slot on the grid. Always in `0..SLOT_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slot(u8);

impl Slot {
    /// The bottom-right slot, empty on a solved board.
    pub const LAST: Slot = Slot(SLOT_COUNT as u8 - 1);

    /// Create a slot, returning `None` outside the grid.
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < SLOT_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Slot at `row`, `col`, if both are on the grid.
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIDE && col < GRID_SIDE {
            Some(Self(row * GRID_SIDE + col))
        } else {
            None
        }
    }

    /// Every slot in order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT as u8).map(Slot)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / GRID_SIDE
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % GRID_SIDE
    }

    /// The adjacent slot in `direction`, if it exists.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Slot> {
        let (row, col) = (self.row(), self.col());
        match direction {
            Direction::Up => row.checked_sub(1).and_then(|r| Slot::at(r, col)),
            Direction::Down => Slot::at(row + 1, col),
            Direction::Left => col.checked_sub(1).and_then(|c| Slot::at(row, c)),
            Direction::Right => Slot::at(row, col + 1),
        }
    }

    /// Orthogonally adjacent slots (up, down, left, right order).
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Slot; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.neighbor(d))
            .collect()
    }

    /// Direction from `self` to an orthogonally adjacent `other`.
    #[must_use]
    pub fn direction_to(self, other: Slot) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor(d) == Some(other))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}
