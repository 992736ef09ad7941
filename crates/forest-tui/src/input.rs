//! Input handling - convert key events to prompt answers
//!
//! Arrow keys, WASD and the vi keys (hjkl) all move. Esc, `q` and Ctrl+C
//! abandon the game; everything else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use forest_core::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Quit,
}

/// Convert a key event to an action, or `None` for keys the prompt ignores.
pub fn key_to_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
            Some(KeyAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
            Some(KeyAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            Some(KeyAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Some(KeyAction::Move(Direction::Right))
        }
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::Quit),
        _ => None,
    }
}
