//! Level progression
//!
//! After a clear has settled, reaching the level threshold advances one level:
//! more moves and time, a fresh row pushed in from the top, possibly a new
//! color, plus one power-up and one lock seeded into the new row.

use crate::board::{Board, Cell};
use crate::game_state::GameState;
use crate::outcome::LevelUp;
use crate::rng::GameRng;
use crate::scoring::{level_grows_palette, level_threshold};
use crate::types::{Coord, COLS, LEVEL_UP_BONUS_MOVES, LEVEL_UP_BONUS_SECS};

/// Level up once if the score has reached the threshold.
pub fn check_level_up(board: &mut Board, state: &mut GameState, rng: &mut GameRng) -> Option<LevelUp> {
    if state.score < state.level_threshold {
        return None;
    }
    Some(level_up(board, state, rng))
}

/// Advance one level unconditionally.
pub fn level_up(board: &mut Board, state: &mut GameState, rng: &mut GameRng) -> LevelUp {
    state.level += 1;
    state.level_threshold = level_threshold(state.level);
    state.bonus_time += LEVEL_UP_BONUS_SECS;
    state.moves_left += LEVEL_UP_BONUS_MOVES;

    inject_row(board, state, rng);

    // The injected row uses the palette as it was before this level's growth.
    let new_color = if level_grows_palette(state.level) {
        state.palette.grow()
    } else {
        None
    };

    let power_up = rng.pick_power_up();
    let power_up_col = rng.pick_column();
    board.set_power_up(Coord::new(0, power_up_col), Some(power_up));

    let locked_col = rng.pick_column();
    board.set_locked(Coord::new(0, locked_col), true);

    LevelUp {
        level: state.level,
        threshold: state.level_threshold,
        new_color,
        power_up,
        power_up_col,
        locked_col,
    }
}

/// Push every row down one (dropping the bottom row) and fill row 0 with
/// plain random tiles.
pub fn inject_row(board: &mut Board, state: &GameState, rng: &mut GameRng) {
    board.shift_rows_down();
    for col in 0..COLS {
        let color = rng.pick_color(state.palette.colors());
        board.set_tile(Coord::new(0, col as u8), Cell::tile(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorId, ROWS};

    fn striped_board() -> Board {
        // Each row has its own color so shifts are easy to see.
        let mut board = Board::new();
        for row in 0..ROWS {
            let color = ColorId::ALL[row % 4];
            for col in 0..COLS {
                board.set_tile(Coord::new(row as u8, col as u8), Cell::tile(color));
            }
        }
        board
    }

    #[test]
    fn test_below_threshold_does_nothing() {
        let mut board = striped_board();
        let before = board.clone();
        let mut state = GameState::new();
        state.score = 490;
        let mut rng = GameRng::new(1);

        assert!(check_level_up(&mut board, &mut state, &mut rng).is_none());
        assert_eq!(board, before);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_level_up_counters() {
        let mut board = striped_board();
        let mut state = GameState::new();
        state.score = 500;
        state.moves_left = 3;
        let mut rng = GameRng::new(1);

        let up = check_level_up(&mut board, &mut state, &mut rng).unwrap();
        assert_eq!(up.level, 2);
        assert_eq!(state.level, 2);
        assert_eq!(state.level_threshold, 1000);
        assert_eq!(state.bonus_time, 30);
        assert_eq!(state.moves_left, 13);
        assert_eq!(up.new_color, None);
    }

    #[test]
    fn test_row_injection_shifts_and_seeds_hazards() {
        let before = striped_board();
        let mut board = before.clone();
        let mut state = GameState::new();
        let mut rng = GameRng::new(77);

        let up = level_up(&mut board, &mut state, &mut rng);

        for row in 1..ROWS {
            for col in 0..COLS {
                let now = board.color_at(Coord::new(row as u8, col as u8));
                let was = before.color_at(Coord::new(row as u8 - 1, col as u8));
                assert_eq!(now, was, "row {} col {}", row, col);
            }
        }
        assert!(board
            .row(0)
            .iter()
            .all(|c| c.color.is_some_and(|color| state.palette.contains(color))));

        let locks: Vec<Coord> = board.locked_coords().collect();
        assert_eq!(locks, vec![Coord::new(0, up.locked_col)]);
        let powers: Vec<_> = board.power_ups().collect();
        assert_eq!(powers, vec![(Coord::new(0, up.power_up_col), up.power_up)]);
    }

    #[test]
    fn test_palette_grows_every_third_level() {
        let mut board = striped_board();
        let mut state = GameState::new();
        let mut rng = GameRng::new(9);

        let mut grown = Vec::new();
        for _ in 0..9 {
            let up = level_up(&mut board, &mut state, &mut rng);
            if let Some(color) = up.new_color {
                grown.push((up.level, color));
            }
        }
        assert_eq!(state.level, 10);
        assert_eq!(
            grown,
            vec![(3, ColorId::Magenta), (6, ColorId::Cyan)]
        );
        assert!(state.palette.is_full());
    }
}
