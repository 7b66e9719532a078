//! Key mapping from terminal events to viewer actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Direction;

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Shift the viewport, leaving entities where they are.
    ScrollView(Direction),
    /// Move the player one cell.
    Step(Direction),
    /// Move the player one cell in a random direction.
    RandomStep,
    /// Put the player on a fresh random spawn point.
    Respawn,
}

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    match key.code {
        // Viewport
        KeyCode::Up => Some(ViewerAction::ScrollView(Direction::Up)),
        KeyCode::Down => Some(ViewerAction::ScrollView(Direction::Down)),
        KeyCode::Left => Some(ViewerAction::ScrollView(Direction::Left)),
        KeyCode::Right => Some(ViewerAction::ScrollView(Direction::Right)),

        // Player
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(ViewerAction::Step(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(ViewerAction::Step(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(ViewerAction::Step(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(ViewerAction::Step(Direction::Right))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(ViewerAction::RandomStep),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(ViewerAction::Respawn),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
