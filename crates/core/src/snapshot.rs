use crate::board::Cell;
use crate::types::{ColorId, Coord, PowerUpKind, COLS, INITIAL_LEVEL, INITIAL_MOVES, ROWS};

/// Read-only copy of everything the shell draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; COLS]; ROWS],
    pub score: u32,
    pub level: u32,
    pub level_threshold: u32,
    pub moves_left: u32,
    /// Seconds left, clamped at zero.
    pub time_left: u32,
    pub palette_len: u8,
    pub active_power_up: Option<PowerUpKind>,
    pub swap_first: Option<Coord>,
    /// Clearable groups currently on the board.
    pub groups_left: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[Cell::EMPTY; COLS]; ROWS];
        self.score = 0;
        self.level = INITIAL_LEVEL;
        self.level_threshold = 0;
        self.moves_left = INITIAL_MOVES;
        self.time_left = 0;
        self.palette_len = 0;
        self.active_power_up = None;
        self.swap_first = None;
        self.groups_left = 0;
        self.game_over = false;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if !coord.in_bounds() {
            return None;
        }
        Some(self.board[coord.row as usize][coord.col as usize])
    }

    pub fn color_at(&self, coord: Coord) -> Option<ColorId> {
        self.cell(coord).and_then(|cell| cell.color)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// True while the player is choosing swap targets.
    pub fn swap_pending(&self) -> bool {
        self.active_power_up == Some(PowerUpKind::Swap)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[Cell::EMPTY; COLS]; ROWS],
            score: 0,
            level: 0,
            level_threshold: 0,
            moves_left: 0,
            time_left: 0,
            palette_len: 0,
            active_power_up: None,
            swap_first: None,
            groups_left: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
