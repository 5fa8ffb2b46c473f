//! Animation playback for the shell.
//!
//! The engine reports what moved and what was hit; this module turns those
//! events into short-lived visuals advanced by the frame clock:
//!
//! - falling tiles glide from their old row to their new one at
//!   [`FALL_ROWS_PER_SEC`]
//! - every hit tile spawns [`PARTICLES_PER_BURST`] sparks that drift outwards
//!   for [`PARTICLE_LIFETIME_MS`]
//!
//! Positions are in board cell units (row/col as `f32`); the view maps them
//! to terminal coordinates.

use crate::core::{FallingAnimation, FrameEvents, ParticleBurst};
use crate::types::ColorId;

/// Falling speed in rows per second.
pub const FALL_ROWS_PER_SEC: f32 = 7.5;

/// How long a particle lives.
pub const PARTICLE_LIFETIME_MS: u32 = 1000;

pub const PARTICLES_PER_BURST: usize = 5;

/// Spark drift speed in cells per second.
const PARTICLE_SPEED: f32 = 1.5;

/// Unit directions the sparks of one burst fly in.
const SPARK_DIRECTIONS: [(f32, f32); PARTICLES_PER_BURST] = [
    (-1.0, 0.0),
    (-0.31, 0.95),
    (0.81, 0.59),
    (0.81, -0.59),
    (-0.31, -0.95),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingBlock {
    pub col: u8,
    pub color: ColorId,
    /// Current (fractional) row.
    pub row: f32,
    pub to_row: u8,
}

impl FallingBlock {
    fn from_event(anim: &FallingAnimation) -> Self {
        Self {
            col: anim.col,
            color: anim.color,
            row: anim.from_row as f32,
            to_row: anim.to_row,
        }
    }

    pub fn landed(&self) -> bool {
        self.row >= self.to_row as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub row: f32,
    pub col: f32,
    pub d_row: f32,
    pub d_col: f32,
    pub color: ColorId,
    pub age_ms: u32,
}

impl Particle {
    pub fn alive(&self) -> bool {
        self.age_ms < PARTICLE_LIFETIME_MS
    }

    /// Remaining life in `0.0..=1.0`.
    pub fn life(&self) -> f32 {
        1.0 - (self.age_ms.min(PARTICLE_LIFETIME_MS) as f32 / PARTICLE_LIFETIME_MS as f32)
    }
}

/// Everything currently in flight.
#[derive(Debug, Clone, Default)]
pub struct Animations {
    falling: Vec<FallingBlock>,
    particles: Vec<Particle>,
}

impl Animations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn falling(&self) -> &[FallingBlock] {
        &self.falling
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_idle(&self) -> bool {
        self.falling.is_empty() && self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.falling.clear();
        self.particles.clear();
    }

    /// Start playback for a batch of engine events.
    ///
    /// A new settle replaces any falls still in flight; particles accumulate.
    pub fn push_events(&mut self, events: &FrameEvents) {
        if !events.falling.is_empty() {
            self.falling.clear();
            self.falling
                .extend(events.falling.iter().map(FallingBlock::from_event));
        }
        for burst in &events.bursts {
            self.spawn_burst(burst);
        }
    }

    fn spawn_burst(&mut self, burst: &ParticleBurst) {
        let (row, col) = (burst.coord.row as f32, burst.coord.col as f32);
        self.particles
            .extend(SPARK_DIRECTIONS.iter().map(|&(d_row, d_col)| Particle {
                row,
                col,
                d_row: d_row * PARTICLE_SPEED,
                d_col: d_col * PARTICLE_SPEED,
                color: burst.color,
                age_ms: 0,
            }));
    }

    /// Advance by `elapsed_ms` and drop whatever has finished.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let dt = elapsed_ms as f32 / 1000.0;

        for block in &mut self.falling {
            block.row = (block.row + FALL_ROWS_PER_SEC * dt).min(block.to_row as f32);
        }
        self.falling.retain(|b| !b.landed());

        for p in &mut self.particles {
            p.row += p.d_row * dt;
            p.col += p.d_col * dt;
            p.age_ms = p.age_ms.saturating_add(elapsed_ms);
        }
        self.particles.retain(Particle::alive);
    }
}
