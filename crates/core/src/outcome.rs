//! Results and events the engine hands back to the shell.
//!
//! A [`MoveResult`] describes one click. [`FrameEvents`] accumulates the
//! presentation side effects (falling tiles, particle bursts, sound cues)
//! until the shell drains them with `GameEngine::take_events`.

use crate::types::{ColorId, Coord, PowerUpKind};

/// One tile falling within its column during a settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingAnimation {
    pub from_row: u8,
    pub to_row: u8,
    pub col: u8,
    pub color: ColorId,
}

/// A tile that was hit by a clear; the shell spawns particles for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleBurst {
    pub coord: Coord,
    pub color: ColorId,
}

/// Sound the shell should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Clear,
    PowerUp,
    GameOver,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Clear => "clear",
            SoundCue::PowerUp => "power_up",
            SoundCue::GameOver => "game_over",
        }
    }
}

/// What a click turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Off the board, on an empty cell, or after game over. Nothing changed.
    Ignored,
    /// First tap of a swap was recorded.
    SwapSelected,
    /// Second tap of a swap exchanged two colors.
    Swapped,
    /// Click on a lone tile (or with no moves left). Score and time penalised.
    Miss,
    /// A group was cleared.
    Clear,
}

/// Rows, colors and hazards added by a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelUp {
    pub level: u32,
    pub threshold: u32,
    /// Color appended to the palette, if this level grew it.
    pub new_color: Option<ColorId>,
    pub power_up: PowerUpKind,
    pub power_up_col: u8,
    pub locked_col: u8,
}

/// Everything one click changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub kind: MoveKind,
    pub coord: Coord,
    /// Cells emptied by the clear or by a bomb.
    pub cleared: Vec<Coord>,
    /// Locked tiles that absorbed the hit and survived.
    pub unlocked: Vec<Coord>,
    pub score_delta: i64,
    /// Power-up picked up from the clicked tile.
    pub collected: Option<PowerUpKind>,
    /// Power-up now waiting for further taps.
    pub activated: Option<PowerUpKind>,
    pub falling: Vec<FallingAnimation>,
    pub level_up: Option<LevelUp>,
    pub game_over: bool,
}

impl MoveResult {
    pub(crate) fn new(kind: MoveKind, coord: Coord, game_over: bool) -> Self {
        Self {
            kind,
            coord,
            cleared: Vec::new(),
            unlocked: Vec::new(),
            score_delta: 0,
            collected: None,
            activated: None,
            falling: Vec::new(),
            level_up: None,
            game_over,
        }
    }

    pub fn ignored(coord: Coord, game_over: bool) -> Self {
        Self::new(MoveKind::Ignored, coord, game_over)
    }

    /// True if the click changed engine state.
    pub fn changed(&self) -> bool {
        self.kind != MoveKind::Ignored
    }
}

/// Presentation events accumulated since the last drain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub falling: Vec<FallingAnimation>,
    pub bursts: Vec<ParticleBurst>,
    pub cues: Vec<SoundCue>,
}

impl FrameEvents {
    pub fn is_empty(&self) -> bool {
        self.falling.is_empty() && self.bursts.is_empty() && self.cues.is_empty()
    }

    pub fn clear(&mut self) {
        self.falling.clear();
        self.bursts.clear();
        self.cues.clear();
    }
}
