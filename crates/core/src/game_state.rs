//! Game state module - counters, palette and timer for one session
//!
//! `GameState` is plain data owned by the engine. It holds everything about a
//! session except the board itself: score, level, move budget, the countdown
//! and the pending power-up selection.

use arrayvec::ArrayVec;

use crate::scoring::level_threshold;
use crate::types::{
    ColorId, Coord, PowerUpKind, INITIAL_LEVEL, INITIAL_MOVES, INITIAL_PALETTE_LEN,
    INITIAL_TIME_LIMIT_SECS,
};

/// The ordered, append-only set of colors in play.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: ArrayVec<ColorId, 6>,
}

impl Palette {
    /// The starting palette: the first four base colors.
    pub fn new() -> Self {
        Self {
            colors: ColorId::ALL[..INITIAL_PALETTE_LEN].iter().copied().collect(),
        }
    }

    pub fn colors(&self) -> &[ColorId] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.colors.len() == ColorId::ALL.len()
    }

    pub fn contains(&self, color: ColorId) -> bool {
        self.colors.contains(&color)
    }

    /// Append the next base color. Returns it, or `None` once all six are in play.
    pub fn grow(&mut self) -> Option<ColorId> {
        let next = *ColorId::ALL.get(self.colors.len())?;
        self.colors.push(next);
        Some(next)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Session counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) level_threshold: u32,
    pub(crate) moves_left: u32,
    pub(crate) time_limit: u32,
    pub(crate) bonus_time: u32,
    pub(crate) elapsed_ms: u64,
    pub(crate) palette: Palette,
    pub(crate) active_power_up: Option<PowerUpKind>,
    pub(crate) swap_first: Option<Coord>,
    pub(crate) game_over: bool,
}

impl GameState {
    /// Fresh level-1 counters.
    pub fn new() -> Self {
        Self {
            score: 0,
            level: INITIAL_LEVEL,
            level_threshold: level_threshold(INITIAL_LEVEL),
            moves_left: INITIAL_MOVES,
            time_limit: INITIAL_TIME_LIMIT_SECS,
            bonus_time: 0,
            elapsed_ms: 0,
            palette: Palette::new(),
            active_power_up: None,
            swap_first: None,
            game_over: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_threshold(&self) -> u32 {
        self.level_threshold
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn bonus_time(&self) -> u32 {
        self.bonus_time
    }

    /// Whole seconds elapsed since the session started.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn active_power_up(&self) -> Option<PowerUpKind> {
        self.active_power_up
    }

    pub fn swap_first(&self) -> Option<Coord> {
        self.swap_first
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Seconds remaining; negative once the countdown has run out.
    pub fn time_left_raw(&self) -> i64 {
        self.time_limit as i64 + self.bonus_time as i64 - self.elapsed_seconds() as i64
    }

    /// Seconds remaining, clamped at zero for display.
    pub fn time_left(&self) -> u32 {
        self.time_left_raw().max(0) as u32
    }

    pub fn out_of_time(&self) -> bool {
        self.time_left_raw() <= 0
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LEVEL_THRESHOLD_STEP, MIN_TIME_LIMIT_SECS};

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.level_threshold, LEVEL_THRESHOLD_STEP);
        assert_eq!(state.moves_left, 10);
        assert_eq!(state.time_limit, 120);
        assert_eq!(state.bonus_time, 0);
        assert_eq!(state.palette.colors(), &ColorId::ALL[..4]);
        assert!(state.active_power_up.is_none());
        assert!(state.swap_first.is_none());
        assert!(!state.game_over);
    }

    #[test]
    fn test_palette_grows_to_six_then_stops() {
        let mut palette = Palette::new();
        assert_eq!(palette.grow(), Some(ColorId::Magenta));
        assert_eq!(palette.grow(), Some(ColorId::Cyan));
        assert!(palette.is_full());
        assert_eq!(palette.grow(), None);
        assert_eq!(palette.len(), 6);
    }

    #[test]
    fn test_time_left_uses_whole_seconds() {
        let mut state = GameState::new();
        state.elapsed_ms = 999;
        assert_eq!(state.time_left(), 120);
        state.elapsed_ms = 1_000;
        assert_eq!(state.time_left(), 119);
    }

    #[test]
    fn test_time_left_clamps_and_bonus_extends() {
        let mut state = GameState::new();
        state.time_limit = MIN_TIME_LIMIT_SECS;
        state.elapsed_ms = 15_000;
        assert_eq!(state.time_left_raw(), -5);
        assert_eq!(state.time_left(), 0);
        assert!(state.out_of_time());

        state.bonus_time = 30;
        assert_eq!(state.time_left(), 25);
        assert!(!state.out_of_time());
    }
}
