//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into shell commands and keeps the
//! keyboard cursor that turns those commands into
//! [`crate::types::GameAction`] clicks.

pub mod cursor;
pub mod map;

pub use blockblast_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, mouse_click_position, should_quit, KeyCommand};
