//! Engine scenarios - whole clicks driven through the public API

use blockblast::core::{
    has_any_move, Board, Cell, FallingAnimation, GameEngine, MoveKind, SoundCue,
};
use blockblast::types::{
    ColorId, Coord, GameAction, PowerUpKind, CELL_COUNT, EXTRA_MOVES_BONUS, LEVEL_UP_BONUS_MOVES,
};
use proptest::prelude::*;

/// Green/blue checkerboard: no two neighbours share a color.
fn checkerboard() -> Board {
    let mut board = Board::new();
    for idx in 0..CELL_COUNT {
        let c = Coord::from_index(idx);
        let color = if (c.row + c.col) % 2 == 0 {
            ColorId::Green
        } else {
            ColorId::Blue
        };
        board.set_tile(c, Cell::tile(color));
    }
    board
}

/// Checkerboard whose top two rows are ten isolated horizontal pairs.
///
/// Nothing sits above them, so clearing one never moves another tile.
fn top_pairs_board() -> Board {
    let mut board = checkerboard();
    let rows = ["RRYYRRYYRR", "YYRRYYRRYY"];
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let color = if ch == 'R' { ColorId::Red } else { ColorId::Yellow };
            board.set_color(Coord::new(r as u8, c as u8), Some(color));
        }
    }
    board
}

/// Click nine of the ten top pairs, leaving one move and the pair at (1, 8).
fn spend_nine_moves(game: &mut GameEngine) {
    let clicks = [(0, 0), (0, 2), (0, 4), (0, 6), (0, 8), (1, 0), (1, 2), (1, 4), (1, 6)];
    for (row, col) in clicks {
        let result = game.click(row, col);
        assert_eq!(result.kind, MoveKind::Clear);
        assert!(result.falling.is_empty());
    }
    assert_eq!(game.moves_left(), 1);
    assert_eq!(game.score(), 180);
    assert!(!game.game_over());
}

#[test]
fn lone_survivor_falls_to_the_corner() {
    let mut board = Board::filled(ColorId::Red);
    board.set_color(Coord::new(0, 0), Some(ColorId::Blue));
    let mut game = GameEngine::from_board(42, board);

    let result = game.click(5, 5);
    assert_eq!(result.kind, MoveKind::Clear);
    assert_eq!(result.cleared.len(), 99);
    assert!(!result.cleared.contains(&Coord::new(0, 0)));
    assert_eq!(
        result.falling,
        vec![FallingAnimation {
            from_row: 0,
            to_row: 9,
            col: 0,
            color: ColorId::Blue,
        }]
    );

    // 990 points crosses the first threshold: the bottom row (and the blue
    // survivor with it) is pushed off by the injected row.
    let up = result.level_up.expect("level up");
    assert_eq!(up.level, 2);
    assert_eq!(game.board().occupied_count(), 10);
    assert_eq!(game.game_over(), !has_any_move(game.board()));
}

#[test]
fn miss_with_one_move_left_keeps_the_move() {
    let mut game = GameEngine::from_board(1, top_pairs_board());
    spend_nine_moves(&mut game);

    let result = game.click(9, 9);
    assert_eq!(result.kind, MoveKind::Miss);
    assert_eq!(result.score_delta, -10);
    assert_eq!(game.moves_left(), 1);
    assert_eq!(game.score(), 170);
    assert_eq!(game.state().time_limit(), 115);
    assert!(!game.game_over());
}

#[test]
fn last_move_ends_the_game() {
    let mut game = GameEngine::from_board(1, top_pairs_board());
    spend_nine_moves(&mut game);

    let result = game.click(1, 8);
    assert_eq!(result.kind, MoveKind::Clear);
    assert!(result.game_over);
    assert_eq!(game.moves_left(), 0);

    // Nothing else is accepted until restart.
    assert_eq!(game.click(9, 9).kind, MoveKind::Ignored);
    assert!(game.apply_action(GameAction::Restart));
    assert!(!game.game_over());
    assert_eq!(game.moves_left(), 10);
}

#[test]
fn locked_tile_survives_first_clear_only() {
    let mut board = top_pairs_board();
    board.set_locked(Coord::new(0, 0), true);
    let mut game = GameEngine::from_board(1, board);

    let first = game.click(0, 1);
    assert_eq!(first.cleared, vec![Coord::new(0, 1)]);
    assert_eq!(first.unlocked, vec![Coord::new(0, 0)]);
    assert_eq!(first.score_delta, 20);
    assert_eq!(game.board().color_at(Coord::new(0, 0)), Some(ColorId::Red));
    assert!(!game.board().is_locked(Coord::new(0, 0)));

    // Its partner is gone, so it no longer forms a group.
    assert_eq!(game.click(0, 0).kind, MoveKind::Miss);
}

#[test]
fn locked_pair_needs_two_clears() {
    let board = Board::parse(&["", "", "", "", "", "", "", "", "RR", "rrGG"]).unwrap();
    let mut game = GameEngine::from_board(1, board);

    let first = game.click(8, 1);
    assert_eq!(first.cleared.len(), 2);
    assert_eq!(first.unlocked.len(), 2);
    assert_eq!(game.board().to_picture()[9], "RRGG......");

    let second = game.click(9, 0);
    assert_eq!(second.cleared.len(), 2);
    assert!(second.unlocked.is_empty());
    assert_eq!(game.board().to_picture()[9], "GG........");
}

#[test]
fn swap_moves_colors_and_pins_flags() {
    let mut board = top_pairs_board();
    board.set_power_up(Coord::new(0, 0), Some(PowerUpKind::Swap));
    board.set_locked(Coord::new(5, 5), true);
    board.set_power_up(Coord::new(5, 6), Some(PowerUpKind::Bomb));
    let mut game = GameEngine::from_board(1, board);

    let pick = game.click(0, 0);
    assert_eq!(pick.collected, Some(PowerUpKind::Swap));
    assert_eq!(game.active_power_up(), Some(PowerUpKind::Swap));
    let moves = game.moves_left();

    let (a, b) = (Coord::new(5, 5), Coord::new(5, 6));
    let before_a = game.board().color_at(a);
    let before_b = game.board().color_at(b);

    assert_eq!(game.click(a.row, a.col).kind, MoveKind::SwapSelected);
    assert_eq!(game.click(a.row, a.col).kind, MoveKind::Ignored);
    assert_eq!(game.active_power_up(), Some(PowerUpKind::Swap));
    assert_eq!(game.click(b.row, b.col).kind, MoveKind::Swapped);

    assert_eq!(game.board().color_at(a), before_b);
    assert_eq!(game.board().color_at(b), before_a);
    assert!(game.board().is_locked(a));
    assert!(!game.board().is_locked(b));
    assert_eq!(game.board().power_up_at(b), Some(PowerUpKind::Bomb));
    assert_eq!(game.board().power_up_at(a), None);

    assert_eq!(game.active_power_up(), None);
    assert_eq!(game.moves_left(), moves);
}

#[test]
fn bomb_destroys_locked_tiles() {
    let mut board = top_pairs_board();
    board.set_power_up(Coord::new(1, 2), Some(PowerUpKind::Bomb));
    for c in 1..=3 {
        board.set_locked(Coord::new(2, c), true);
    }
    let mut game = GameEngine::from_board(1, board);

    let result = game.click(1, 2);
    assert_eq!(result.collected, Some(PowerUpKind::Bomb));
    // Pair (1,2)-(1,3) plus the bomb's 3x3 around (1,2): rows 0..=2, cols 1..=3.
    let mut cleared = result.cleared.clone();
    cleared.sort();
    let expected: Vec<Coord> = (0..=2u8)
        .flat_map(|r| (1..=3u8).map(move |c| Coord::new(r, c)))
        .collect();
    assert_eq!(cleared, expected);
    assert!(result.unlocked.is_empty());
    assert_eq!(game.board().locked_coords().count(), 0);

    let cues = game.take_events().cues;
    assert_eq!(&cues[..2], &[SoundCue::Clear, SoundCue::PowerUp]);
}

#[test]
fn extra_moves_power_up_adds_five() {
    let mut board = top_pairs_board();
    board.set_power_up(Coord::new(0, 4), Some(PowerUpKind::ExtraMoves));
    let mut game = GameEngine::from_board(1, board);

    let result = game.click(0, 4);
    assert_eq!(result.collected, Some(PowerUpKind::ExtraMoves));
    assert_eq!(game.moves_left(), 10 - 1 + EXTRA_MOVES_BONUS);
}

#[test]
fn timer_runs_out_through_ticks() {
    let mut game = GameEngine::new(8);
    for _ in 0..119 {
        assert!(game.apply_action(GameAction::Tick { elapsed_ms: 1000 }));
    }
    assert!(!game.game_over());
    assert_eq!(game.time_left(), 1);

    game.apply_action(GameAction::Tick { elapsed_ms: 1000 });
    assert!(game.game_over());
    assert!(!game.apply_action(GameAction::Tick { elapsed_ms: 1000 }));

    let cues = game.take_events().cues;
    assert_eq!(cues, vec![SoundCue::GameOver]);
}

#[test]
fn restart_is_deterministic_per_seed() {
    let mut a = GameEngine::new(2024);
    let mut b = GameEngine::new(2024);
    a.restart();
    b.restart();
    assert_eq!(a.board(), b.board());
    assert_eq!(a.episode_id(), 1);
    assert_ne!(a.board(), GameEngine::new(2024).board());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_rollouts_respect_move_and_score_rules(
        seed in any::<u64>(),
        clicks in prop::collection::vec((0u8..10, 0u8..10), 1..60),
    ) {
        let mut game = GameEngine::new(seed);
        prop_assert!(has_any_move(game.board()));

        for (row, col) in clicks {
            let moves = game.moves_left();
            let score = game.score();
            let palette = game.state().palette().len();
            let was_over = game.game_over();

            let result = game.click(row, col);

            if was_over {
                prop_assert_eq!(result.kind, MoveKind::Ignored);
            }

            let mut expected_moves = moves;
            match result.kind {
                MoveKind::Clear => {
                    expected_moves -= 1;
                    if result.collected == Some(PowerUpKind::ExtraMoves) {
                        expected_moves += EXTRA_MOVES_BONUS;
                    }
                    prop_assert_eq!(game.score() as i64 - score as i64, result.score_delta);
                    if result.collected != Some(PowerUpKind::Bomb) {
                        // Every group member is either emptied or unlocked.
                        let touched = result.cleared.len() + result.unlocked.len();
                        prop_assert!(touched >= 2);
                        prop_assert_eq!(result.score_delta, 10 * touched as i64);
                    }
                }
                MoveKind::Miss => {
                    prop_assert_eq!(game.score(), score.saturating_sub(10));
                }
                MoveKind::Ignored | MoveKind::SwapSelected | MoveKind::Swapped => {
                    prop_assert_eq!(game.score(), score);
                }
            }
            if result.level_up.is_some() {
                expected_moves += LEVEL_UP_BONUS_MOVES;
            }
            prop_assert_eq!(game.moves_left(), expected_moves);
            prop_assert!(game.state().palette().len() >= palette);

            // Flags never sit on empty cells.
            for (_, cell) in game.board().iter() {
                if cell.is_empty() {
                    prop_assert!(!cell.locked);
                    prop_assert!(cell.power_up.is_none());
                }
            }

            if !game.game_over() {
                prop_assert!(game.moves_left() > 0);
                prop_assert!(has_any_move(game.board()));
            }
        }
    }
}
