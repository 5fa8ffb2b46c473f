//! Engine module - one owned game session
//!
//! `GameEngine` ties together the board, the session counters and the RNG. The
//! shell drives it with three actions (click, tick, restart) and reads back a
//! [`GameSnapshot`] plus the presentation events queued since the last drain.
//! Every action is total: bad input is ignored, a bad move is a miss, and the
//! end of the game is a state, not an error.

use crate::board::Board;
use crate::game_state::GameState;
use crate::generator::generate;
use crate::gravity::settle;
use crate::group::{count_groups, find_group, has_any_move};
use crate::outcome::{FrameEvents, MoveKind, MoveResult, ParticleBurst, SoundCue};
use crate::powerup::{apply_power_up, PowerUpEffect};
use crate::progression::check_level_up;
use crate::rng::GameRng;
use crate::scoring::{clear_points, score_after_miss, time_limit_after_miss};
use crate::snapshot::GameSnapshot;
use crate::types::{Coord, GameAction, PowerUpKind, ROWS};

/// A single game session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    state: GameState,
    rng: GameRng,
    events: FrameEvents,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
}

impl GameEngine {
    /// Start a session on a freshly generated board.
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let state = GameState::new();
        let board = generate(state.palette().colors(), &mut rng);
        Self {
            board,
            state,
            rng,
            events: FrameEvents::default(),
            episode_id: 0,
        }
    }

    /// Start a session on a prepared board. The seed drives later level-up
    /// rows and restarts. A board without moves starts out game over.
    pub fn from_board(seed: u64, board: Board) -> Self {
        let mut engine = Self {
            board,
            state: GameState::new(),
            rng: GameRng::new(seed),
            events: FrameEvents::default(),
            episode_id: 0,
        };
        engine.refresh_game_over();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn level(&self) -> u32 {
        self.state.level()
    }

    pub fn moves_left(&self) -> u32 {
        self.state.moves_left()
    }

    pub fn time_left(&self) -> u32 {
        self.state.time_left()
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn active_power_up(&self) -> Option<PowerUpKind> {
        self.state.active_power_up()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Events queued since the last call.
    pub fn pending_events(&self) -> &FrameEvents {
        &self.events
    }

    /// Take and clear the queued presentation events.
    pub fn take_events(&mut self) -> FrameEvents {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for row in 0..ROWS {
            out.board[row].copy_from_slice(self.board.row(row));
        }
        out.score = self.state.score();
        out.level = self.state.level();
        out.level_threshold = self.state.level_threshold();
        out.moves_left = self.state.moves_left();
        out.time_left = self.state.time_left();
        out.palette_len = self.state.palette().len() as u8;
        out.active_power_up = self.state.active_power_up();
        out.swap_first = self.state.swap_first();
        out.groups_left = count_groups(&self.board) as u32;
        out.game_over = self.state.game_over();
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action. Returns true if engine state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click { row, col } => self.click(row, col).changed(),
            GameAction::Tick { elapsed_ms } => {
                let was_over = self.state.game_over;
                self.tick(elapsed_ms);
                // Ticks always move the clock unless the game had already ended.
                !was_over
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Click the cell at (`row`, `col`).
    ///
    /// While a swap is pending the click picks a swap target; otherwise it
    /// tries to clear the group under the cursor.
    pub fn click(&mut self, row: u8, col: u8) -> MoveResult {
        let coord = Coord::new(row, col);
        if !coord.in_bounds() || self.state.game_over || self.board.is_empty_at(coord) {
            return MoveResult::ignored(coord, self.state.game_over);
        }

        if self.state.active_power_up == Some(PowerUpKind::Swap) {
            return self.resolve_swap(coord);
        }
        self.resolve_group(coord)
    }

    fn resolve_swap(&mut self, coord: Coord) -> MoveResult {
        let Some(first) = self.state.swap_first else {
            self.state.swap_first = Some(coord);
            let mut result = MoveResult::new(MoveKind::SwapSelected, coord, false);
            result.activated = Some(PowerUpKind::Swap);
            return result;
        };

        // Same cell twice keeps the selection and the power-up.
        if first == coord || !self.board.swap_colors(first, coord) {
            let mut result = MoveResult::ignored(coord, false);
            result.activated = Some(PowerUpKind::Swap);
            return result;
        }

        self.state.active_power_up = None;
        self.state.swap_first = None;
        self.events.cues.push(SoundCue::PowerUp);
        self.refresh_game_over();

        MoveResult::new(MoveKind::Swapped, coord, self.state.game_over)
    }

    fn resolve_group(&mut self, coord: Coord) -> MoveResult {
        let group = find_group(&self.board, coord);

        if !group.is_clearable() || self.state.moves_left == 0 {
            let before = self.state.score;
            self.state.score = score_after_miss(before);
            self.state.time_limit = time_limit_after_miss(self.state.time_limit);

            let mut result = MoveResult::new(MoveKind::Miss, coord, self.state.game_over);
            result.score_delta = self.state.score as i64 - before as i64;
            return result;
        }

        let mut result = MoveResult::new(MoveKind::Clear, coord, false);

        self.state.moves_left -= 1;
        let points = clear_points(group.len());
        self.state.score = self.state.score.saturating_add(points);
        result.score_delta = points as i64;
        self.events.cues.push(SoundCue::Clear);

        let collected = self.board.take_power_up(coord);
        result.collected = collected;

        for &at in group.cells() {
            if let Some(color) = self.board.color_at(at) {
                self.events.bursts.push(ParticleBurst { coord: at, color });
            }
            if self.board.unlock(at) {
                result.unlocked.push(at);
            } else {
                self.board.clear_cell(at);
                result.cleared.push(at);
            }
        }

        if let Some(kind) = collected {
            self.events.cues.push(SoundCue::PowerUp);
            match apply_power_up(&mut self.board, kind, coord) {
                PowerUpEffect::Blast(blasted) => {
                    for (at, color) in blasted {
                        // Survivors of the clear are destroyed by the blast.
                        result.unlocked.retain(|&u| u != at);
                        result.cleared.push(at);
                        self.events.bursts.push(ParticleBurst { coord: at, color });
                    }
                }
                PowerUpEffect::AwaitSwap => {
                    self.state.active_power_up = Some(PowerUpKind::Swap);
                    self.state.swap_first = None;
                    result.activated = Some(PowerUpKind::Swap);
                }
                PowerUpEffect::ExtraMoves(extra) => {
                    self.state.moves_left += extra;
                }
            }
        }

        result.falling = settle(&mut self.board);
        self.events.falling.extend_from_slice(&result.falling);

        result.level_up = check_level_up(&mut self.board, &mut self.state, &mut self.rng);

        self.refresh_game_over();
        result.game_over = self.state.game_over;
        result
    }

    /// Advance the countdown. Returns true if time just ran out.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.state.game_over {
            return false;
        }
        self.state.elapsed_ms += elapsed_ms as u64;
        if self.state.out_of_time() {
            self.set_game_over();
            return true;
        }
        false
    }

    /// Throw the session away and start over on a new board.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.state = GameState::new();
        self.board = generate(self.state.palette().colors(), &mut self.rng);
        self.events.clear();
    }

    fn refresh_game_over(&mut self) {
        if self.state.moves_left == 0 || !has_any_move(&self.board) {
            self.set_game_over();
        }
    }

    fn set_game_over(&mut self) {
        if !self.state.game_over {
            self.state.game_over = true;
            self.events.cues.push(SoundCue::GameOver);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
