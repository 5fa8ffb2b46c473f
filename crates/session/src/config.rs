//! Shell configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.txt";

/// Frame interval in milliseconds (about 30 frames per second).
pub const DEFAULT_TICK_MS: u32 = 33;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    pub highscore_path: PathBuf,
    /// Optional JSONL event log.
    pub log_path: Option<PathBuf>,
    pub tick_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            log_path: None,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Config {
    /// Read `BLOCKBLAST_SEED`, `BLOCKBLAST_HIGHSCORE_PATH`, `BLOCKBLAST_LOG_PATH`
    /// and `BLOCKBLAST_TICK_MS`. Unset, empty or unparseable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = var("BLOCKBLAST_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let highscore_path = var("BLOCKBLAST_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGHSCORE_PATH));

        let log_path = var("BLOCKBLAST_LOG_PATH").map(PathBuf::from);

        let tick_ms = var("BLOCKBLAST_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(DEFAULT_TICK_MS);

        Self {
            seed,
            highscore_path,
            log_path,
            tick_ms,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
