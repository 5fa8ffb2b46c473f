//! Keyboard cursor over the board.
//!
//! The cursor turns [`KeyCommand`]s into engine actions: arrow keys move it
//! (clamped to the board), select clicks the cell under it.

use crate::map::KeyCommand;
use crate::types::{Coord, GameAction, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    coord: Coord,
}

impl BoardCursor {
    /// Cursor starting in the bottom-left corner, where groups usually settle.
    pub fn new() -> Self {
        Self {
            coord: Coord::new(ROWS as u8 - 1, 0),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Move to `coord` (a mouse click). Off-board positions are ignored.
    pub fn set(&mut self, coord: Coord) {
        if coord.in_bounds() {
            self.coord = coord;
        }
    }

    /// Step by (`dr`, `dc`), stopping at the board edge.
    pub fn step(&mut self, dr: i32, dc: i32) {
        let row = (self.coord.row as i32 + dr).clamp(0, ROWS as i32 - 1);
        let col = (self.coord.col as i32 + dc).clamp(0, COLS as i32 - 1);
        self.coord = Coord::new(row as u8, col as u8);
    }

    /// Apply a key command. Returns the engine action it produces, if any.
    pub fn apply(&mut self, command: KeyCommand) -> Option<GameAction> {
        match command {
            KeyCommand::CursorLeft => self.step(0, -1),
            KeyCommand::CursorRight => self.step(0, 1),
            KeyCommand::CursorUp => self.step(-1, 0),
            KeyCommand::CursorDown => self.step(1, 0),
            KeyCommand::Select => return Some(GameAction::click(self.coord)),
            KeyCommand::Restart => return Some(GameAction::Restart),
        }
        None
    }
}

impl Default for BoardCursor {
    fn default() -> Self {
        Self::new()
    }
}
