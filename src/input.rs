use macroquad::input::{is_key_pressed, KeyCode};

use crate::board::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Only honoured once the session is over.
    Restart,
}

const BOUND_KEYS: [KeyCode; 9] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::S,
    KeyCode::A,
    KeyCode::D,
    KeyCode::R,
];

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(Command::Turn(Direction::Right)),
        KeyCode::R => Some(Command::Restart),
        _ => None,
    }
}

/// Commands for keys pressed since the last frame.
pub fn poll_keys() -> Vec<Command> {
    BOUND_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| command_for_key(*key))
        .collect()
}
