//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, event logging).
//!
//! # Board Dimensions
//!
//! The playfield is a square grid:
//!
//! - **Rows**: 10 (indexed 0-9, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! Gravity pulls tiles towards row 9, compaction pulls columns towards column 0.
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_MOVES` | 10 | Move budget at level 1 |
//! | `INITIAL_TIME_LIMIT_SECS` | 120 | Countdown at level 1 |
//! | `MIN_TIME_LIMIT_SECS` | 10 | Floor for the miss time penalty |
//! | `LEVEL_THRESHOLD_STEP` | 500 | Threshold is `level * 500` |
//! | `LEVEL_UP_BONUS_SECS` | 30 | Bonus time per level-up |
//! | `LEVEL_UP_BONUS_MOVES` | 10 | Extra moves per level-up |
//! | `EXTRA_MOVES_BONUS` | 5 | Moves granted by the extra-moves power-up |
//!
//! # Examples
//!
//! ```
//! use blockblast_types::{ColorId, Coord, PowerUpKind, COLS, ROWS};
//!
//! assert_eq!(ROWS, 10);
//! assert_eq!(COLS, 10);
//!
//! let c = Coord::new(9, 0);
//! assert_eq!(c.index(), 90);
//! assert_eq!(Coord::from_index(90), c);
//!
//! assert_eq!(ColorId::from_str("red"), Some(ColorId::Red));
//! assert_eq!(PowerUpKind::Bomb.letter(), 'B');
//! ```

/// Number of rows on the board.
pub const ROWS: usize = 10;

/// Number of columns on the board.
pub const COLS: usize = 10;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = ROWS * COLS;

/// Points awarded per tile in a cleared group.
pub const POINTS_PER_TILE: u32 = 10;

/// Points deducted for a miss (score never goes below zero).
pub const MISS_SCORE_PENALTY: u32 = 10;

/// Seconds removed from the time limit for a miss.
pub const MISS_TIME_PENALTY_SECS: u32 = 5;

/// The time limit never drops below this many seconds.
pub const MIN_TIME_LIMIT_SECS: u32 = 10;

/// Time limit at the start of a session.
pub const INITIAL_TIME_LIMIT_SECS: u32 = 120;

/// Move budget at the start of a session.
pub const INITIAL_MOVES: u32 = 10;

/// Level a session starts on.
pub const INITIAL_LEVEL: u32 = 1;

/// Level threshold is `level * LEVEL_THRESHOLD_STEP`.
pub const LEVEL_THRESHOLD_STEP: u32 = 500;

/// Bonus seconds granted on level-up.
pub const LEVEL_UP_BONUS_SECS: u32 = 30;

/// Extra moves granted on level-up.
pub const LEVEL_UP_BONUS_MOVES: u32 = 10;

/// Moves granted by [`PowerUpKind::ExtraMoves`].
pub const EXTRA_MOVES_BONUS: u32 = 5;

/// A new palette color is unlocked on every level divisible by this.
pub const PALETTE_GROWTH_EVERY: u32 = 3;

/// Number of colors in play at the start of a session.
pub const INITIAL_PALETTE_LEN: usize = 4;

/// Chance (percent) that a generated cell carries a power-up.
pub const POWER_UP_CHANCE_PCT: u32 = 5;

/// Chance (percent) that a generated cell is locked.
pub const LOCK_CHANCE_PCT: u32 = 10;


/// A board position, `row` from the top and `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from signed values, rejecting anything off the board.
    ///
    /// ```
    /// use blockblast_types::Coord;
    ///
    /// assert_eq!(Coord::checked(0, 9), Some(Coord::new(0, 9)));
    /// assert_eq!(Coord::checked(-1, 0), None);
    /// assert_eq!(Coord::checked(0, 10), None);
    /// ```
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if row < 0 || col < 0 || row >= ROWS as i32 || col >= COLS as i32 {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }

    pub fn in_bounds(&self) -> bool {
        (self.row as usize) < ROWS && (self.col as usize) < COLS
    }

    /// Flat row-major index (`row * COLS + col`).
    #[inline(always)]
    pub fn index(&self) -> usize {
        (self.row as usize) * COLS + (self.col as usize)
    }

    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        Self::new((index / COLS) as u8, (index % COLS) as u8)
    }

    /// The up-to-four orthogonal neighbours that lie on the board.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        let (r, c) = (self.row as i32, self.col as i32);
        [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
            .into_iter()
            .filter_map(|(r, c)| Coord::checked(r, c))
    }
}

/// Tile colors, in the order they join the palette.
///
/// The first four are in play from level 1; `Magenta` and `Cyan` are
/// unlocked by level progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorId {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl ColorId {
    /// Every base color in palette order.
    pub const ALL: [ColorId; 6] = [
        ColorId::Red,
        ColorId::Green,
        ColorId::Blue,
        ColorId::Yellow,
        ColorId::Magenta,
        ColorId::Cyan,
    ];

    /// Parse a color from its lowercase name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(ColorId::Red),
            "green" => Some(ColorId::Green),
            "blue" => Some(ColorId::Blue),
            "yellow" => Some(ColorId::Yellow),
            "magenta" => Some(ColorId::Magenta),
            "cyan" => Some(ColorId::Cyan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorId::Red => "red",
            ColorId::Green => "green",
            ColorId::Blue => "blue",
            ColorId::Yellow => "yellow",
            ColorId::Magenta => "magenta",
            ColorId::Cyan => "cyan",
        }
    }

    /// RGB triple of the base palette entry.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorId::Red => (255, 0, 0),
            ColorId::Green => (0, 255, 0),
            ColorId::Blue => (0, 0, 255),
            ColorId::Yellow => (255, 255, 0),
            ColorId::Magenta => (255, 0, 255),
            ColorId::Cyan => (0, 255, 255),
        }
    }
}

/// Power-ups a tile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Clears the 3x3 neighbourhood around the clicked tile.
    Bomb,
    /// Lets the player swap the colors of two tiles.
    Swap,
    /// Grants [`EXTRA_MOVES_BONUS`] moves.
    ExtraMoves,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Bomb,
        PowerUpKind::Swap,
        PowerUpKind::ExtraMoves,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bomb" => Some(PowerUpKind::Bomb),
            "swap" => Some(PowerUpKind::Swap),
            "extra_moves" | "extramoves" => Some(PowerUpKind::ExtraMoves),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Bomb => "bomb",
            PowerUpKind::Swap => "swap",
            PowerUpKind::ExtraMoves => "extra_moves",
        }
    }

    /// Single glyph used to mark the power-up on a tile.
    pub fn letter(&self) -> char {
        match self {
            PowerUpKind::Bomb => 'B',
            PowerUpKind::Swap => 'S',
            PowerUpKind::ExtraMoves => '+',
        }
    }
}

/// Discrete actions the shell feeds into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Click a cell. Also used to pick swap targets while a swap is active.
    Click { row: u8, col: u8 },
    /// Advance the countdown by the given number of milliseconds.
    Tick { elapsed_ms: u32 },
    /// Start a fresh session.
    Restart,
}

impl GameAction {
    pub fn click(coord: Coord) -> Self {
        GameAction::Click {
            row: coord.row,
            col: coord.col,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Click { .. } => "click",
            GameAction::Tick { .. } => "tick",
            GameAction::Restart => "restart",
        }
    }
}
