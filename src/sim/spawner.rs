//! Block spawn cadence

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::palette::LEVEL_COLORS;
use super::state::Block;
use crate::consts::*;

/// Creates one block every `BLOCK_SPAWN_INTERVAL` ticks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks since the last spawn
    pub timer: u32,
    /// Next block ID
    next_id: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            timer: 0,
            next_id: 1,
        }
    }
}

impl Spawner {
    /// Advance the spawn clock, returning a new block when it fires.
    ///
    /// The block starts one block-height above the playfield at a uniform
    /// x in [0, W - BLOCK_SIZE) with a uniform palette colour.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Block> {
        self.timer += 1;
        if self.timer < BLOCK_SPAWN_INTERVAL {
            return None;
        }
        self.timer = 0;

        let x = rng.random_range(0.0..GAME_WIDTH - BLOCK_SIZE);
        let color = LEVEL_COLORS[rng.random_range(0..LEVEL_COLORS.len())];
        let id = self.next_id;
        self.next_id += 1;

        Some(Block::new(id, Vec2::new(x, -BLOCK_SIZE), color))
    }
}
