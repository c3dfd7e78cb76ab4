//! Key mapping from terminal events to game intent.

use blockfall_types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that act while held and are tracked with press/release edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Left,
    Right,
    SoftDrop,
}

/// Map a key to its held-direction meaning, if it has one.
pub fn map_held_key(code: KeyCode) -> Option<HeldKey> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(HeldKey::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(HeldKey::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(HeldKey::SoftDrop),
        _ => None,
    }
}

/// Map a key press to a one-shot command, if it has one.
pub fn map_one_shot(code: KeyCode) -> Option<GameCommand> {
    match code {
        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameCommand::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameCommand::RotateCcw),

        // Placement
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
