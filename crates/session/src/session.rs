//! Session - the engine plus its shell-side collaborators
//!
//! `Session` owns one [`GameEngine`] and keeps the high score file and the
//! event log in step with it. The terminal runner only talks to this type.

use anyhow::Result;

use crate::config::Config;
use crate::core::{FrameEvents, GameEngine, GameSnapshot, MoveResult};
use crate::event_log::{EventLog, LogEvent};
use crate::highscore::HighScoreStore;
use crate::types::{Coord, GameAction};

pub struct Session {
    engine: GameEngine,
    high_scores: HighScoreStore,
    log: EventLog,
    /// Set once the current game's end has been recorded.
    game_over_recorded: bool,
}

impl Session {
    /// Build a session from configuration. Fails only if the event log cannot be opened.
    pub fn new(config: &Config) -> Result<Self> {
        let log = match &config.log_path {
            Some(path) => EventLog::open(path)?,
            None => EventLog::disabled(),
        };
        let high_scores = HighScoreStore::load(&config.highscore_path);
        Ok(Self::with_parts(GameEngine::new(config.seed), high_scores, log))
    }

    pub fn with_parts(engine: GameEngine, high_scores: HighScoreStore, log: EventLog) -> Self {
        let mut session = Self {
            engine,
            high_scores,
            log,
            game_over_recorded: false,
        };
        session.log.write(&LogEvent::SessionStart {
            seed: session.engine.seed(),
            episode_id: session.engine.episode_id(),
        });
        session.after_action();
        session
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn high_score(&self) -> u32 {
        self.high_scores.best()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    pub fn take_events(&mut self) -> FrameEvents {
        self.engine.take_events()
    }

    pub fn click(&mut self, coord: Coord) -> MoveResult {
        let result = self.engine.click(coord.row, coord.col);
        if result.changed() {
            self.log.write(&LogEvent::click(
                &result,
                self.engine.score(),
                self.engine.moves_left(),
            ));
        }
        if let Some(up) = &result.level_up {
            self.log.write(&LogEvent::level_up(up));
        }
        self.after_action();
        result
    }

    /// Advance the countdown. Returns true if time just ran out.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let expired = self.engine.tick(elapsed_ms);
        self.after_action();
        expired
    }

    pub fn restart(&mut self) {
        self.engine.restart();
        self.game_over_recorded = false;
        self.log.write(&LogEvent::Restart {
            episode_id: self.engine.episode_id(),
        });
    }

    /// Route a game action. Returns true if engine state changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click { row, col } => self.click(Coord::new(row, col)).changed(),
            GameAction::Tick { elapsed_ms } => {
                let was_over = self.engine.game_over();
                self.tick(elapsed_ms);
                !was_over
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn flush(&mut self) {
        self.log.flush();
    }

    /// Record the end of a game once: high score first, then the log line.
    fn after_action(&mut self) {
        if !self.engine.game_over() || self.game_over_recorded {
            return;
        }
        self.game_over_recorded = true;

        let score = self.engine.score();
        let new_high_score = match self.high_scores.record(score) {
            Ok(beaten) => beaten,
            Err(e) => {
                eprintln!("[Session] high score not saved: {:#}", e);
                false
            }
        };
        self.log.write(&LogEvent::GameOver {
            episode_id: self.engine.episode_id(),
            score,
            level: self.engine.level(),
            new_high_score,
        });
        self.log.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, MoveKind};
    use crate::types::ColorId;
    use serde_json::Value;
    use tempfile::tempdir;

    fn lone_blue_board() -> Board {
        let mut board = Board::filled(ColorId::Red);
        board.set_color(Coord::new(0, 0), Some(ColorId::Blue));
        board
    }

    #[test]
    fn test_game_over_records_high_score_once() {
        let dir = tempdir().unwrap();
        let hs_path = dir.path().join("hs.txt");
        std::fs::write(&hs_path, "100").unwrap();

        let mut session = Session::with_parts(
            GameEngine::new(7),
            HighScoreStore::load(&hs_path),
            EventLog::disabled(),
        );
        assert_eq!(session.high_score(), 100);

        // Time out with no points: not beaten.
        assert!(session.tick(200_000));
        assert_eq!(std::fs::read_to_string(&hs_path).unwrap(), "100");

        session.restart();
        assert!(!session.engine().game_over());
    }

    #[test]
    fn test_beaten_high_score_is_written() {
        let dir = tempdir().unwrap();
        let hs_path = dir.path().join("hs.txt");
        let log_path = dir.path().join("events.jsonl");

        let mut session = Session::with_parts(
            GameEngine::from_board(3, lone_blue_board()),
            HighScoreStore::load(&hs_path),
            EventLog::open(&log_path).unwrap(),
        );

        let result = session.click(Coord::new(5, 5));
        assert_eq!(result.kind, MoveKind::Clear);
        assert_eq!(result.score_delta, 990);

        // The level-up row keeps the game going; run the clock out instead.
        session.tick(10_000_000);
        assert!(session.engine().game_over());
        assert_eq!(session.high_score(), 990);
        assert_eq!(std::fs::read_to_string(&hs_path).unwrap(), "990");

        // Further ticks do not log a second game over.
        session.tick(1_000);
        drop(session);

        let lines: Vec<Value> = std::fs::read_to_string(&log_path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let types: Vec<&str> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
        assert_eq!(types, vec!["session_start", "click", "level_up", "game_over"]);
        assert_eq!(lines[1]["kind"], "clear");
        assert_eq!(lines[1]["cleared"], 99);
        assert_eq!(lines[3]["new_high_score"], true);
        assert_eq!(lines[3]["score"], 990);
    }

    #[test]
    fn test_ignored_clicks_are_not_logged() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("events.jsonl");
        let mut session = Session::with_parts(
            GameEngine::new(1),
            HighScoreStore::load(dir.path().join("hs.txt")),
            EventLog::open(&log_path).unwrap(),
        );

        assert!(!session.apply(GameAction::Click { row: 42, col: 0 }));
        session.flush();
        let text = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_new_from_config() {
        let dir = tempdir().unwrap();
        let config = Config {
            seed: 99,
            highscore_path: dir.path().join("hs.txt"),
            log_path: Some(dir.path().join("log.jsonl")),
            tick_ms: 33,
        };
        let session = Session::new(&config).unwrap();
        assert_eq!(session.engine().seed(), 99);
        assert_eq!(session.high_score(), 0);
        assert!(dir.path().join("log.jsonl").exists());
    }
}
