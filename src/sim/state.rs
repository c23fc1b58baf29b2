//! Game state and core simulation types
//!
//! Everything one session needs lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::input::InputState;
use super::palette::Color;
use super::progression::Progression;
use super::spawner::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// Health ran out; terminal for the session
    GameOver,
}

/// Something that happened during a tick, for the host to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BlockSpawned { id: u32 },
    /// Player was hit; `block` is the removed block at its impact position
    BlockHit { block: Block, health: u8 },
    /// Block fell out of the playfield
    BlockEscaped { id: u32 },
    LevelUp { level: u32 },
    SpeedUp { speed: f32 },
    GameOver { score: u64, level: u32 },
}

/// A falling block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub color: Color,
}

impl Block {
    pub fn new(id: u32, pos: Vec2, color: Color) -> Self {
        Self { id, pos, color }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.pos.y += BLOCK_SPEED;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(BLOCK_SIZE))
    }

    /// Fully below the playfield
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y > GAME_HEIGHT
    }
}

/// The player's triangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the bounding box; y never changes after spawn
    pub pos: Vec2,
    /// Horizontal step per frame (never decreases)
    pub speed: f32,
    /// Frames since the last speed boost
    pub speedup_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                GAME_WIDTH / 2.0,
                GAME_HEIGHT - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN,
            ),
            speed: PLAYER_START_SPEED,
            speedup_timer: 0,
        }
    }
}

impl Player {
    /// Move from input and run the speed-up clock.
    ///
    /// Returns true on the frame the speed increases.
    pub fn update(&mut self, input: &InputState) -> bool {
        let half = PLAYER_SIZE / 2.0;
        let max_x = GAME_WIDTH - half;

        // Right is only considered when the left branch does not fire
        if input.move_left && self.pos.x > half {
            self.pos.x -= self.speed;
        } else if input.move_right && self.pos.x < max_x {
            self.pos.x += self.speed;
        }
        self.pos.x = self.pos.x.clamp(half, max_x);

        self.speedup_timer += 1;
        if self.speedup_timer >= PLAYER_SPEEDUP_INTERVAL {
            self.speedup_timer = 0;
            self.speed += PLAYER_SPEEDUP_AMOUNT;
            return true;
        }
        false
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(PLAYER_SIZE))
    }

    pub fn collides_with(&self, block: &Block) -> bool {
        self.bounds().intersects(&block.bounds())
    }

    /// Triangle vertices (apex, bottom-right, bottom-left)
    pub fn triangle(&self) -> [Vec2; 3] {
        let half = PLAYER_SIZE / 2.0;
        [
            Vec2::new(self.pos.x, self.pos.y - half),
            Vec2::new(self.pos.x + half, self.pos.y + half),
            Vec2::new(self.pos.x - half, self.pos.y + half),
        ]
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Remaining lives, in [0, MAX_HEALTH]
    pub health: u8,
    pub player: Player,
    /// Live blocks in spawn order
    pub blocks: Vec<Block>,
    pub spawner: Spawner,
    pub progression: Progression,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Running,
            health: MAX_HEALTH,
            player: Player::default(),
            blocks: Vec::new(),
            spawner: Spawner::default(),
            progression: Progression::default(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u64 {
        self.progression.score
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    /// JSON dump of the whole state
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
