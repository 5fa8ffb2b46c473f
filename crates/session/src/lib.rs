//! Shell-side collaborators of the engine.
//!
//! The engine itself does no I/O. This crate holds what a playable program
//! needs around it:
//!
//! - [`config`]: `Config::from_env()` (seed, high score path, event log path, frame interval)
//! - [`highscore`]: the single-integer high score file
//! - [`event_log`]: optional JSONL record of clicks, level-ups, restarts and game overs
//! - [`session`]: `Session`, which keeps all of the above in step with a `GameEngine`

pub mod config;
pub mod event_log;
pub mod highscore;
pub mod session;

pub use blockblast_core as core;
pub use blockblast_types as types;

pub use config::Config;
pub use event_log::{EventLog, LogEvent};
pub use highscore::HighScoreStore;
pub use session::Session;
