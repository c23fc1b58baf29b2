//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod palette;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use input::{Direction, InputState};
pub use palette::{Color, LEVEL_COLORS, level_color, palette_color};
pub use progression::Progression;
pub use spawner::Spawner;
pub use state::{Block, GameEvent, GamePhase, GameState, Player};
pub use tick::tick;
