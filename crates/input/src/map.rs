//! Key mapping from terminal events to game inputs.

use crate::types::{Direction, EdgeEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Tracked while held; fed to the controller's auto-repeat
    Hold(Direction),
    /// Fires once per press
    Edge(EdgeEvent),
}

/// Map keyboard input to a game input.
pub fn map_key(key: KeyEvent) -> Option<KeyBinding> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyBinding::Edge(EdgeEvent::Quit));
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(KeyBinding::Hold(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(KeyBinding::Hold(Direction::Right)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(KeyBinding::Hold(Direction::Down)),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(KeyBinding::Hold(Direction::Rotate)),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(KeyBinding::Edge(EdgeEvent::Pause)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(KeyBinding::Edge(EdgeEvent::Quit))
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    map_key(key) == Some(KeyBinding::Edge(EdgeEvent::Quit))
}
