//! Optimal solver.
//!
//! Breadth-first search over packed board codes. Half of all arrangements
//! (181,440) are reachable from the solved board; the search visits at
//! most that many, so it always terminates and returns a shortest path.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::board::{Board, TileId};

/// Shortest sequence of tiles to slide to solve `board`.
///
/// Returns an empty vec for a solved board and `None` for an arrangement
/// that can't reach the solved board (only possible via
/// `Board::from_slots`; shuffled boards are always solvable).
#[must_use]
pub fn solve(board: &Board) -> Option<Vec<TileId>> {
    let goal = Board::solved().encode();
    let start = board.encode();
    if start == goal {
        return Some(Vec::new());
    }

    // code -> (parent code, tile slid to get here); start has no parent
    let mut parents: FxHashMap<u64, Option<(u64, TileId)>> = FxHashMap::default();
    parents.insert(start, None);
    let mut frontier = VecDeque::from([start]);

    while let Some(code) = frontier.pop_front() {
        let Some(current) = Board::decode(code) else {
            continue;
        };

        for tile in current.movable_tiles() {
            let mut next = current.clone();
            next.slide(tile);
            let next_code = next.encode();
            if parents.contains_key(&next_code) {
                continue;
            }
            parents.insert(next_code, Some((code, tile)));
            if next_code == goal {
                return Some(reconstruct(&parents, goal));
            }
            frontier.push_back(next_code);
        }
    }

    None
}

fn reconstruct(parents: &FxHashMap<u64, Option<(u64, TileId)>>, goal: u64) -> Vec<TileId> {
    let mut path = Vec::new();
    let mut code = goal;
    while let Some(Some((parent, tile))) = parents.get(&code) {
        path.push(*tile);
        code = *parent;
    }
    path.reverse();
    path
}
