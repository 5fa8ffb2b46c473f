//! Gravity and compaction
//!
//! Settling runs in two phases after every removal:
//!
//! 1. **Vertical**: each column's tiles drop to the bottom, keeping their
//!    top-to-bottom order. Every tile that moves produces a [`FallingAnimation`].
//! 2. **Horizontal**: columns that still hold a tile slide left, keeping their
//!    order, and empty columns pad the right edge. No animation.
//!
//! Whole cells move, so lock and power-up flags stay attached to their tile.

use crate::board::{Board, Cell};
use crate::outcome::FallingAnimation;
use crate::types::{COLS, ROWS};

/// Drop tiles within each column. Returns one animation per moved tile,
/// column by column, top to bottom.
pub fn settle_columns(board: &mut Board) -> Vec<FallingAnimation> {
    let mut falling = Vec::new();

    for col in 0..COLS {
        let column = board.column(col);
        let count = column.iter().filter(|cell| cell.is_occupied()).count();
        let mut packed = [Cell::EMPTY; ROWS];

        for (i, (from_row, cell)) in column
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .enumerate()
        {
            let to_row = ROWS - count + i;
            packed[to_row] = *cell;
            let Some(color) = cell.color else {
                continue;
            };
            if from_row != to_row {
                falling.push(FallingAnimation {
                    from_row: from_row as u8,
                    to_row: to_row as u8,
                    col: col as u8,
                    color,
                });
            }
        }

        board.set_column(col, &packed);
    }

    falling
}

/// Slide non-empty columns to the left. Returns true if any column moved.
pub fn compact_columns(board: &mut Board) -> bool {
    let mut write = 0usize;
    let mut moved = false;

    for read in 0..COLS {
        if !board.column_occupied(read) {
            continue;
        }
        if read != write {
            let column = board.column(read);
            board.set_column(write, &column);
            moved = true;
        }
        write += 1;
    }

    for col in write..COLS {
        board.set_column(col, &[Cell::EMPTY; ROWS]);
    }

    moved
}

/// Full settle: vertical drop followed by horizontal compaction.
///
/// Animations describe the vertical phase only, in pre-compaction column
/// coordinates.
pub fn settle(board: &mut Board) -> Vec<FallingAnimation> {
    let falling = settle_columns(board);
    compact_columns(board);
    falling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorId, Coord, PowerUpKind};

    #[test]
    fn test_column_drops_to_bottom_in_order() {
        let mut board = Board::parse(&["R", ".", "G", ".", "B"]).unwrap();
        let falling = settle_columns(&mut board);

        assert_eq!(board.color_at(Coord::new(7, 0)), Some(ColorId::Red));
        assert_eq!(board.color_at(Coord::new(8, 0)), Some(ColorId::Green));
        assert_eq!(board.color_at(Coord::new(9, 0)), Some(ColorId::Blue));
        assert_eq!(board.occupied_count(), 3);

        assert_eq!(
            falling,
            vec![
                FallingAnimation { from_row: 0, to_row: 7, col: 0, color: ColorId::Red },
                FallingAnimation { from_row: 2, to_row: 8, col: 0, color: ColorId::Green },
                FallingAnimation { from_row: 4, to_row: 9, col: 0, color: ColorId::Blue },
            ]
        );
    }

    #[test]
    fn test_resting_tiles_emit_no_animation() {
        let mut board = Board::new();
        board.set_tile(Coord::new(9, 3), Cell::tile(ColorId::Red));
        board.set_tile(Coord::new(8, 3), Cell::tile(ColorId::Red));
        assert!(settle_columns(&mut board).is_empty());
    }

    #[test]
    fn test_flags_fall_with_tile() {
        let mut board = Board::new();
        let at = Coord::new(2, 4);
        board.set_tile(
            at,
            Cell {
                color: Some(ColorId::Yellow),
                locked: true,
                power_up: Some(PowerUpKind::Bomb),
            },
        );
        settle_columns(&mut board);

        let landed = Coord::new(9, 4);
        assert!(board.is_locked(landed));
        assert_eq!(board.power_up_at(landed), Some(PowerUpKind::Bomb));
        assert!(board.is_empty_at(at));
    }

    #[test]
    fn test_compaction_packs_left() {
        let mut board = Board::new();
        board.set_tile(Coord::new(9, 2), Cell::tile(ColorId::Red));
        board.set_tile(Coord::new(9, 5), Cell::tile(ColorId::Green));
        board.set_tile(Coord::new(8, 5), Cell::tile(ColorId::Blue));

        assert!(compact_columns(&mut board));
        assert_eq!(board.color_at(Coord::new(9, 0)), Some(ColorId::Red));
        assert_eq!(board.color_at(Coord::new(9, 1)), Some(ColorId::Green));
        assert_eq!(board.color_at(Coord::new(8, 1)), Some(ColorId::Blue));
        for col in 2..COLS {
            assert!(!board.column_occupied(col));
        }
    }

    #[test]
    fn test_compaction_noop_when_packed() {
        let mut board = Board::filled(ColorId::Cyan);
        assert!(!compact_columns(&mut board));
        assert_eq!(board, Board::filled(ColorId::Cyan));
    }

    #[test]
    fn test_settle_single_survivor_lands_bottom_left() {
        let mut board = Board::new();
        board.set_tile(Coord::new(0, 0), Cell::tile(ColorId::Blue));
        let falling = settle(&mut board);
        assert_eq!(falling.len(), 1);
        assert_eq!(board.color_at(Coord::new(9, 0)), Some(ColorId::Blue));
        assert_eq!(board.occupied_count(), 1);
    }
}
