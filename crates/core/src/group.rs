//! Group finder - same-color connectivity search
//!
//! A group is the maximal set of occupied cells reachable from a seed through
//! orthogonal steps between tiles of the seed's exact color. The search uses an
//! explicit stack, a `u128` visited mask (100 cells fit in one word) and
//! fixed-capacity storage, so it never recurses and never allocates.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Coord, CELL_COUNT};

/// A connected same-color component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    cells: ArrayVec<Coord, CELL_COUNT>,
    mask: u128,
}

impl Group {
    fn empty() -> Self {
        Self {
            cells: ArrayVec::new(),
            mask: 0,
        }
    }

    fn insert(&mut self, coord: Coord) -> bool {
        let bit = 1u128 << coord.index();
        if self.mask & bit != 0 {
            return false;
        }
        self.mask |= bit;
        self.cells.push(coord);
        true
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A group a player may clear (two or more tiles).
    pub fn is_clearable(&self) -> bool {
        self.cells.len() > 1
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.mask & (1u128 << coord.index()) != 0
    }

    /// Members in discovery order (the seed first).
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Bitmask of member indices (`1 << coord.index()`).
    pub fn mask(&self) -> u128 {
        self.mask
    }

    /// Members sorted row-major, for stable comparisons.
    pub fn sorted(&self) -> ArrayVec<Coord, CELL_COUNT> {
        let mut out = self.cells.clone();
        out.sort_unstable();
        out
    }
}

/// Find the group containing `seed`.
///
/// Returns an empty group when `seed` is off the board or empty; otherwise the
/// result always contains the seed, whatever the group's size.
pub fn find_group(board: &Board, seed: Coord) -> Group {
    let mut group = Group::empty();
    let Some(color) = board.color_at(seed) else {
        return group;
    };

    let mut stack: ArrayVec<Coord, CELL_COUNT> = ArrayVec::new();
    group.insert(seed);
    stack.push(seed);

    while let Some(at) = stack.pop() {
        for next in at.neighbors() {
            if board.color_at(next) == Some(color) && group.insert(next) {
                // Each cell is pushed at most once, so the stack never overflows.
                stack.push(next);
            }
        }
    }

    group
}

/// True if any clearable group exists. Stops at the first hit.
pub fn has_any_move(board: &Board) -> bool {
    let mut seen: u128 = 0;
    for (coord, cell) in board.iter() {
        if cell.is_empty() || seen & (1u128 << coord.index()) != 0 {
            continue;
        }
        let group = find_group(board, coord);
        if group.is_clearable() {
            return true;
        }
        seen |= group.mask();
    }
    false
}

/// Number of clearable groups on the board.
pub fn count_groups(board: &Board) -> usize {
    let mut seen: u128 = 0;
    let mut count = 0;
    for (coord, cell) in board.iter() {
        if cell.is_empty() || seen & (1u128 << coord.index()) != 0 {
            continue;
        }
        let group = find_group(board, coord);
        if group.is_clearable() {
            count += 1;
        }
        seen |= group.mask();
    }
    count
}
