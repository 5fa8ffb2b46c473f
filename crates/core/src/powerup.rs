//! Power-up effects
//!
//! Collected power-ups resolve against the board at the clicked coordinate.
//! A bomb empties its 3x3 blast unconditionally: locked tiles in range are
//! destroyed outright instead of being unlocked, unlike a normal clear.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{ColorId, Coord, PowerUpKind, EXTRA_MOVES_BONUS};

/// What applying a power-up did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerUpEffect {
    /// Tiles emptied by a bomb, with their colors.
    Blast(ArrayVec<(Coord, ColorId), 9>),
    /// The engine should wait for two swap taps.
    AwaitSwap,
    /// Moves to add to the budget.
    ExtraMoves(u32),
}

impl PowerUpEffect {
    /// Power-up left pending after application.
    pub fn activation(&self) -> Option<PowerUpKind> {
        match self {
            PowerUpEffect::AwaitSwap => Some(PowerUpKind::Swap),
            _ => None,
        }
    }
}

/// Apply `kind` centred on `at`.
pub fn apply_power_up(board: &mut Board, kind: PowerUpKind, at: Coord) -> PowerUpEffect {
    match kind {
        PowerUpKind::Bomb => PowerUpEffect::Blast(detonate(board, at)),
        PowerUpKind::Swap => PowerUpEffect::AwaitSwap,
        PowerUpKind::ExtraMoves => PowerUpEffect::ExtraMoves(EXTRA_MOVES_BONUS),
    }
}

/// Empty every occupied cell in the 3x3 square around `center`, clipped to
/// the board. Returns the emptied cells.
pub fn detonate(board: &mut Board, center: Coord) -> ArrayVec<(Coord, ColorId), 9> {
    let mut cleared = ArrayVec::new();
    let (r, c) = (center.row as i32, center.col as i32);
    for dr in -1..=1 {
        for dc in -1..=1 {
            let Some(at) = Coord::checked(r + dr, c + dc) else {
                continue;
            };
            if let Some(color) = board.clear_cell(at).and_then(|cell| cell.color) {
                cleared.push((at, color));
            }
        }
    }
    cleared
}
