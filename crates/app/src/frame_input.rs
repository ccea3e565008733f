//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};
use pursuit_core::Direction;

// Checked in order; the first held key decides the move.
const MOVE_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::W, Direction::Up),
    (KeyCode::S, Direction::Down),
    (KeyCode::A, Direction::Left),
    (KeyCode::D, Direction::Right),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Movement keys held down this frame.
    pub keys_down: Vec<KeyCode>,
    pub quit_requested: bool,
}

impl FrameInput {
    pub fn direction(&self) -> Option<Direction> {
        direction_from_keys(&self.keys_down)
    }
}

pub fn direction_from_keys(keys_down: &[KeyCode]) -> Option<Direction> {
    MOVE_KEYS.iter().find(|(key, _)| keys_down.contains(key)).map(|(_, direction)| *direction)
}

pub fn capture_frame_input() -> FrameInput {
    let keys_down = MOVE_KEYS.iter().map(|(key, _)| *key).filter(|key| is_key_down(*key)).collect();
    FrameInput { keys_down, quit_requested: is_key_pressed(KeyCode::Escape) }
}
