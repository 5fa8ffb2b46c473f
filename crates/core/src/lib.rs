//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards and level-up rows
//! - **Testable**: Boards can be built from text pictures and driven click by click
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 grid of colored tiles with lock and power-up flags
//! - [`group`]: Flood-fill of same-colored tiles and move detection
//! - [`gravity`]: Vertical settle and horizontal column compaction
//! - [`generator`]: Random boards that always offer at least one move
//! - [`powerup`]: Bomb, swap and extra-moves effects
//! - [`scoring`]: Points, miss penalties and level thresholds
//! - [`progression`]: Level-up counters and top-row injection
//! - [`game_state`]: Session counters, palette and countdown
//! - [`engine`]: The click/tick/restart state machine tying it together
//! - [`snapshot`]: Read-only copy of everything the shell draws
//!
//! # Game Rules
//!
//! - **Groups**: Clicking a tile selects its 4-connected same-color group
//! - **Clear**: Groups of two or more cost one move and pay 10 points per tile
//! - **Miss**: Lone tiles (or an empty move budget) cost 10 points and 5 seconds
//! - **Locks**: A locked tile survives its first clear and loses the lock
//! - **Gravity**: Tiles fall within their column, then empty columns close up leftwards
//! - **Level-up**: At `level * 500` points the rows shift down and a fresh row enters at the top
//! - **Game over**: No moves left, no group on the board, or the countdown hits zero
//!
//! # Example
//!
//! ```
//! use blockblast_core::{Board, GameEngine, MoveKind};
//! use blockblast_types::{ColorId, Coord};
//!
//! let mut board = Board::filled(ColorId::Red);
//! board.set_color(Coord::new(0, 0), Some(ColorId::Blue));
//!
//! let mut game = GameEngine::from_board(12345, board);
//! let result = game.click(5, 5);
//!
//! assert_eq!(result.kind, MoveKind::Clear);
//! assert_eq!(result.cleared.len(), 99);
//! assert_eq!(game.moves_left(), 9);
//! ```
//!
//! # Timing
//!
//! The engine has no clock of its own. The shell calls
//! [`GameEngine::tick`](engine::GameEngine::tick) with the milliseconds elapsed
//! since the previous tick; the countdown is evaluated in whole seconds.

pub mod board;
pub mod engine;
pub mod game_state;
pub mod generator;
pub mod gravity;
pub mod group;
pub mod outcome;
pub mod powerup;
pub mod progression;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockblast_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use engine::GameEngine;
pub use game_state::{GameState, Palette};
pub use generator::{generate, top_up};
pub use gravity::{compact_columns, settle, settle_columns};
pub use group::{count_groups, find_group, has_any_move, Group};
pub use outcome::{
    FallingAnimation, FrameEvents, LevelUp, MoveKind, MoveResult, ParticleBurst, SoundCue,
};
pub use powerup::{apply_power_up, PowerUpEffect};
pub use rng::GameRng;
pub use scoring::{clear_points, level_threshold};
pub use snapshot::GameSnapshot;
