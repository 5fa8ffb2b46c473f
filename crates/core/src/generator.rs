//! Board generation
//!
//! Fresh boards are rejection-sampled: fill every cell at random and retry until
//! at least one clearable group exists. With four or more colors on 100 cells a
//! retry is already rare, but the loop is still bounded: after
//! [`MAX_GENERATE_ATTEMPTS`] rejected boards the last sample is topped up by
//! recolouring one bottom-row tile to match its neighbour.

use crate::board::{Board, Cell};
use crate::group::has_any_move;
use crate::rng::GameRng;
use crate::types::{ColorId, Coord, CELL_COUNT, LOCK_CHANCE_PCT, POWER_UP_CHANCE_PCT, ROWS};

/// Rejected samples before falling back to a top-up.
pub const MAX_GENERATE_ATTEMPTS: u32 = 64;

/// Generate a playable board from `palette`.
pub fn generate(palette: &[ColorId], rng: &mut GameRng) -> Board {
    generate_with_attempts(palette, rng, MAX_GENERATE_ATTEMPTS)
}

/// [`generate`] with an explicit attempt budget. Always returns a board with a move.
pub fn generate_with_attempts(palette: &[ColorId], rng: &mut GameRng, attempts: u32) -> Board {
    for _ in 0..attempts {
        let board = random_board(palette, rng);
        if has_any_move(&board) {
            return board;
        }
    }

    let mut board = random_board(palette, rng);
    top_up(&mut board);
    board
}

/// One unconditioned sample: uniform colors, 5% power-ups, 10% locks.
pub fn random_board(palette: &[ColorId], rng: &mut GameRng) -> Board {
    let mut board = Board::new();
    for idx in 0..CELL_COUNT {
        board.set_tile(Coord::from_index(idx), random_cell(palette, rng));
    }
    board
}

fn random_cell(palette: &[ColorId], rng: &mut GameRng) -> Cell {
    let color = rng.pick_color(palette);
    // Independent rolls: a tile can be both locked and carry a power-up.
    let power_up = rng
        .chance_pct(POWER_UP_CHANCE_PCT)
        .then(|| rng.pick_power_up());
    let locked = rng.chance_pct(LOCK_CHANCE_PCT);
    Cell {
        color: Some(color),
        locked,
        power_up,
    }
}

/// Make sure a move exists by pairing the two bottom-left tiles.
///
/// Returns true if the board was changed.
pub fn top_up(board: &mut Board) -> bool {
    if has_any_move(board) {
        return false;
    }
    let anchor = Coord::new((ROWS - 1) as u8, 0);
    let partner = Coord::new((ROWS - 1) as u8, 1);
    let Some(color) = board.color_at(anchor) else {
        return false;
    };
    if board.is_empty_at(partner) {
        board.set_tile(partner, Cell::tile(color));
    } else {
        board.set_color(partner, Some(color));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::INITIAL_PALETTE_LEN;

    fn palette() -> &'static [ColorId] {
        &ColorId::ALL[..INITIAL_PALETTE_LEN]
    }

    #[test]
    fn test_generated_board_is_full_and_playable() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            let board = generate(palette(), &mut rng);
            assert_eq!(board.occupied_count(), CELL_COUNT);
            assert!(has_any_move(&board));
            assert!(board
                .iter()
                .all(|(_, c)| c.color.is_some_and(|color| palette().contains(&color))));
        }
    }

    #[test]
    fn test_zero_attempts_still_yields_a_move() {
        let mut rng = GameRng::new(5);
        for _ in 0..20 {
            let board = generate_with_attempts(palette(), &mut rng, 0);
            assert!(has_any_move(&board));
        }
    }

    #[test]
    fn test_top_up_on_checkerboard() {
        let mut board = Board::new();
        for idx in 0..CELL_COUNT {
            let coord = Coord::from_index(idx);
            let color = if (coord.row + coord.col) % 2 == 0 {
                ColorId::Red
            } else {
                ColorId::Green
            };
            board.set_tile(coord, Cell::tile(color));
        }
        assert!(!has_any_move(&board));
        assert!(top_up(&mut board));
        assert!(has_any_move(&board));
        assert!(!top_up(&mut board));
    }

    #[test]
    fn test_flag_rates_are_plausible() {
        let mut rng = GameRng::new(2024);
        let mut locked = 0usize;
        let mut powered = 0usize;
        let samples = 200;
        for _ in 0..samples {
            let board = random_board(palette(), &mut rng);
            locked += board.locked_coords().count();
            powered += board.power_ups().count();
        }
        let cells = (samples * 100) as f64;
        let lock_rate = locked as f64 / cells;
        let power_rate = powered as f64 / cells;
        assert!((0.08..0.12).contains(&lock_rate), "lock rate {}", lock_rate);
        assert!((0.035..0.065).contains(&power_rate), "power-up rate {}", power_rate);
    }
}
