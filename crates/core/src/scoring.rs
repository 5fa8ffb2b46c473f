//! Scoring rules
//!
//! Clears pay a flat rate per tile. Misses cost score and shave the time
//! limit, both with floors. Level thresholds grow linearly.

use crate::types::{
    LEVEL_THRESHOLD_STEP, MIN_TIME_LIMIT_SECS, MISS_SCORE_PENALTY, MISS_TIME_PENALTY_SECS,
    PALETTE_GROWTH_EVERY, POINTS_PER_TILE,
};

/// Points for clearing a group of `size` tiles.
pub fn clear_points(size: usize) -> u32 {
    (size as u32).saturating_mul(POINTS_PER_TILE)
}

/// Score after a miss (never below zero).
pub fn score_after_miss(score: u32) -> u32 {
    score.saturating_sub(MISS_SCORE_PENALTY)
}

/// Time limit after a miss (never below the floor).
pub fn time_limit_after_miss(time_limit: u32) -> u32 {
    time_limit
        .saturating_sub(MISS_TIME_PENALTY_SECS)
        .max(MIN_TIME_LIMIT_SECS)
}

/// Score needed to leave `level`.
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(LEVEL_THRESHOLD_STEP)
}

/// Whether reaching `level` unlocks another palette color.
pub fn level_grows_palette(level: u32) -> bool {
    level % PALETTE_GROWTH_EVERY == 0
}
