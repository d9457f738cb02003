use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// Maps a key to a steering direction. Anything unrecognized maps to
/// `None` and is silently ignored by the caller.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
