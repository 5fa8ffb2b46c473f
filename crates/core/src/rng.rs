//! RNG module - seeded randomness for board generation and level-up injection
//!
//! Every random decision the engine makes goes through [`GameRng`], so the same
//! seed replays the same session. Wraps `StdRng` and exposes the handful of
//! draws the rules need.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{ColorId, PowerUpKind, COLS};

/// Seeded random source owned by one engine instance.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from a non-empty palette.
    pub fn pick_color(&mut self, palette: &[ColorId]) -> ColorId {
        debug_assert!(!palette.is_empty());
        palette[self.rng.gen_range(0..palette.len())]
    }

    pub fn pick_power_up(&mut self) -> PowerUpKind {
        PowerUpKind::ALL[self.rng.gen_range(0..PowerUpKind::ALL.len())]
    }

    pub fn pick_column(&mut self) -> u8 {
        self.rng.gen_range(0..COLS) as u8
    }

    /// True with probability `pct / 100`.
    pub fn chance_pct(&mut self, pct: u32) -> bool {
        self.rng.gen_range(0..100u32) < pct
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
