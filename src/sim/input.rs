//! Directional input state
//!
//! Written by the host's key handlers between frames, read once per tick.

use serde::{Deserialize, Serialize};

/// One of the two logical movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Currently held directions.
///
/// Both flags may be set at once; the player resolves the tie in favour of left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
}

impl InputState {
    pub fn press(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    pub fn set(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Left => self.move_left = pressed,
            Direction::Right => self.move_right = pressed,
        }
    }
}
