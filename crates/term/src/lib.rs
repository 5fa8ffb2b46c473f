//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Play falling tiles and particle bursts off the shell's frame clock
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)
//! - Map mouse positions back to board cells with the same layout used to draw

pub mod animation;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockblast_core as core;
pub use blockblast_types as types;

pub use animation::{Animations, FallingBlock, Particle};
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
