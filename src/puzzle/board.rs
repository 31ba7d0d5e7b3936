//! Tiles and board arrangement.
//!
//! ## Invariant
//!
//! The eight tiles occupy pairwise distinct slots, so exactly one slot is
//! empty. The empty slot is never stored; it is derived by exclusion so it
//! can't drift out of sync with the tiles.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::BoardError;

use super::slot::{Direction, Slot, SLOT_COUNT, TILE_COUNT};

/// Stable tile identity, `0..TILE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u8);

impl TileId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A tile and where it sits.
///
/// `home` is the slot the tile occupies on the solved board. It is fixed
/// at creation; the renderer uses it to pick the tile's image region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    id: TileId,
    slot: Slot,
    home: Slot,
}

impl Tile {
    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    #[must_use]
    pub fn home(&self) -> Slot {
        self.home
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.slot == self.home
    }
}

/// The eight tiles of the puzzle. `tiles[i].id == TileId(i)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl Board {
    /// The solved board: tile `i` at slot `i`, last slot empty.
    #[must_use]
    pub fn solved() -> Self {
        let tiles = std::array::from_fn(|i| {
            let slot = Slot::all().nth(i).unwrap_or(Slot::LAST);
            Tile {
                id: TileId(i as u8),
                slot,
                home: slot,
            }
        });
        Self { tiles }
    }

    /// Build a board from the slot of each tile (`slots[i]` for tile `i`).
    ///
    /// Home slots stay at their solved positions.
    pub fn from_slots(slots: [u8; TILE_COUNT]) -> Result<Self, BoardError> {
        let mut board = Self::solved();
        let mut owner: [Option<u8>; SLOT_COUNT] = [None; SLOT_COUNT];

        for (tile, &raw) in slots.iter().enumerate() {
            let tile = tile as u8;
            let slot = Slot::new(raw).ok_or(BoardError::SlotOutOfRange { tile, slot: raw })?;
            if let Some(first) = owner[slot.index()] {
                return Err(BoardError::DuplicateSlot { slot: raw, first, second: tile });
            }
            owner[slot.index()] = Some(tile);
            board.tiles[tile as usize].slot = slot;
        }

        Ok(board)
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// The tile occupying `slot`, if any.
    #[must_use]
    pub fn tile_at(&self, slot: Slot) -> Option<TileId> {
        self.tiles.iter().find(|t| t.slot == slot).map(|t| t.id)
    }

    /// The unique slot no tile occupies.
    #[must_use]
    pub fn empty_slot(&self) -> Slot {
        Slot::all()
            .find(|&slot| self.tiles.iter().all(|t| t.slot != slot))
            .unwrap_or(Slot::LAST)
    }

    /// Occupied slots orthogonally adjacent to the empty slot (2 to 4).
    #[must_use]
    pub fn movable_slots(&self) -> SmallVec<[Slot; 4]> {
        let empty = self.empty_slot();
        empty
            .neighbors()
            .into_iter()
            .filter(|&slot| self.tile_at(slot).is_some())
            .collect()
    }

    /// Tiles that can slide into the empty slot.
    #[must_use]
    pub fn movable_tiles(&self) -> SmallVec<[TileId; 4]> {
        self.movable_slots()
            .into_iter()
            .filter_map(|slot| self.tile_at(slot))
            .collect()
    }

    /// Whether `id` is adjacent to the empty slot.
    #[must_use]
    pub fn can_slide(&self, id: TileId) -> bool {
        self.tile(id)
            .is_some_and(|tile| self.movable_slots().contains(&tile.slot))
    }

    /// Direction `id` would travel to reach the empty slot.
    #[must_use]
    pub fn slide_direction(&self, id: TileId) -> Option<Direction> {
        let tile = self.tile(id)?;
        tile.slot.direction_to(self.empty_slot())
    }

    /// Slide `id` into the empty slot if it's adjacent.
    ///
    /// Returns whether the tile moved.
    pub fn slide(&mut self, id: TileId) -> bool {
        if !self.can_slide(id) {
            return false;
        }
        let empty = self.empty_slot();
        self.tiles[id.index()].slot = empty;
        true
    }

    /// Every tile is on its home slot.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// Slot-to-tile mapping for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut slots = [None; SLOT_COUNT];
        for tile in &self.tiles {
            slots[tile.slot.index()] = Some(tile.id);
        }
        BoardSnapshot { slots }
    }

    /// Pack the arrangement into 4 bits per slot (0 = empty, else id + 1).
    pub(crate) fn encode(&self) -> u64 {
        self.tiles.iter().fold(0u64, |acc, tile| {
            acc | (u64::from(tile.id.0) + 1) << (4 * tile.slot.raw())
        })
    }

    /// Inverse of `encode`. Returns `None` for codes no board produces.
    pub(crate) fn decode(code: u64) -> Option<Self> {
        let mut slots = [u8::MAX; TILE_COUNT];
        for slot in Slot::all() {
            let nibble = ((code >> (4 * slot.raw())) & 0xF) as usize;
            if nibble == 0 {
                continue;
            }
            let entry = slots.get_mut(nibble - 1)?;
            *entry = slot.raw();
        }
        Self::from_slots(slots).ok()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.snapshot().fmt(f)
    }
}

/// Which tile sits in each slot. `None` marks the empty slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub slots: [Option<TileId>; SLOT_COUNT],
}

impl BoardSnapshot {
    #[must_use]
    pub fn tile_at(&self, slot: Slot) -> Option<TileId> {
        self.slots[slot.index()]
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.slots.chunks(super::slot::GRID_SIDE as usize).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or_else(|| ".".to_string(), |id| id.0.to_string()))
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(raw: u8) -> Slot {
        Slot::new(raw).unwrap()
    }

    #[test]
    fn test_solved_board() {
        let board = Board::solved();
        assert!(board.is_solved());
        assert_eq!(board.empty_slot(), Slot::LAST);
        for tile in board.tiles() {
            assert_eq!(tile.slot(), tile.home());
            assert_eq!(tile.slot().raw(), tile.id().0);
        }
    }

    #[test]
    fn test_from_slots() {
        let board = Board::from_slots([1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(board.empty_slot(), slot(0));
        assert_eq!(board.tile_at(slot(1)), Some(TileId(0)));
        assert!(!board.is_solved());
        assert_eq!(board.tile(TileId(0)).unwrap().home(), slot(0));
    }

    #[test]
    fn test_from_slots_rejects_bad_arrangements() {
        assert_eq!(
            Board::from_slots([0, 1, 2, 3, 4, 5, 6, 9]),
            Err(BoardError::SlotOutOfRange { tile: 7, slot: 9 })
        );
        assert_eq!(
            Board::from_slots([0, 1, 2, 3, 4, 5, 6, 0]),
            Err(BoardError::DuplicateSlot { slot: 0, first: 0, second: 7 })
        );
    }

    #[test]
    fn test_movable_slots() {
        let board = Board::solved();
        assert_eq!(board.movable_slots().as_slice(), &[slot(5), slot(7)]);
        assert_eq!(board.movable_tiles().as_slice(), &[TileId(5), TileId(7)]);

        // Empty in the centre
        let board = Board::from_slots([0, 1, 2, 3, 8, 5, 6, 7]).unwrap();
        assert_eq!(board.empty_slot(), slot(4));
        assert_eq!(board.movable_slots().len(), 4);
    }

    #[test]
    fn test_slide() {
        let mut board = Board::solved();
        assert!(!board.slide(TileId(0)));
        assert_eq!(board.slide_direction(TileId(7)), Some(Direction::Right));

        assert!(board.slide(TileId(7)));
        assert_eq!(board.empty_slot(), slot(7));
        assert_eq!(board.tile(TileId(7)).unwrap().slot(), slot(8));
        assert!(!board.is_solved());

        // And back
        assert!(board.slide(TileId(7)));
        assert!(board.is_solved());
    }

    #[test]
    fn test_unknown_tile_cannot_slide() {
        let mut board = Board::solved();
        assert!(!board.slide(TileId(8)));
        assert!(!board.can_slide(TileId(200)));
    }

    #[test]
    fn test_snapshot() {
        let board = Board::from_slots([1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let snapshot = board.snapshot();
        assert_eq!(snapshot.tile_at(slot(0)), None);
        assert_eq!(snapshot.tile_at(slot(8)), Some(TileId(7)));
        assert_eq!(board.to_string(), ". 0 1\n2 3 4\n5 6 7");
    }

    #[test]
    fn test_encode_decode() {
        let board = Board::from_slots([4, 0, 2, 8, 1, 6, 3, 5]).unwrap();
        assert_eq!(Board::decode(board.encode()), Some(board));
        assert_ne!(Board::solved().encode(), Board::from_slots([4, 0, 2, 8, 1, 6, 3, 5]).unwrap().encode());
        assert_eq!(Board::decode(0), None);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = Board::solved().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
