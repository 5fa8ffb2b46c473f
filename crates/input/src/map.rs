//! Key mapping from terminal events to shell commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Click the tile under the cursor.
    Select,
    Restart,
}

impl KeyCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyCommand::CursorLeft => "cursorLeft",
            KeyCommand::CursorRight => "cursorRight",
            KeyCommand::CursorUp => "cursorUp",
            KeyCommand::CursorDown => "cursorDown",
            KeyCommand::Select => "select",
            KeyCommand::Restart => "restart",
        }
    }
}

/// Map keyboard input to shell commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyCommand::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyCommand::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyCommand::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyCommand::CursorDown)
        }

        // Click
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyCommand::Select),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Terminal position `(x, y)` of a left-button press. Other mouse events map to `None`.
pub fn mouse_click_position(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}
