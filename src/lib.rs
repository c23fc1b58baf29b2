//! Block Dodge - A falling-block avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, progression)
//! - `renderer`: Draws a simulation frame onto an abstract 2D surface
//! - `platform`: Host collaborators (frame session, sound, notifications, browser glue)
//! - `audio`: Web Audio sound effects (wasm only)
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use platform::{FrameControl, Notifier, Session, SoundEffect, SoundSink};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas pixels)
    pub const GAME_WIDTH: f32 = 480.0;
    pub const GAME_HEIGHT: f32 = 640.0;

    /// Player triangle bounding box edge
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Gap between the player's box and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
    /// Horizontal movement per frame at the start of a run
    pub const PLAYER_START_SPEED: f32 = 5.0;
    /// Frames between permanent speed boosts (~42 minutes at 60 fps)
    pub const PLAYER_SPEEDUP_INTERVAL: u32 = 150_000;
    pub const PLAYER_SPEEDUP_AMOUNT: f32 = 2.0;

    /// Falling block edge length
    pub const BLOCK_SIZE: f32 = 10.0;
    /// Vertical advance per frame
    pub const BLOCK_SPEED: f32 = 2.0;
    /// Frames between spawns
    pub const BLOCK_SPAWN_INTERVAL: u32 = 200;

    pub const MAX_HEALTH: u8 = 3;
    /// Score interval per level; also sizes the level bar
    pub const LEVEL_UP_SCORE: u64 = 50;

    /// HUD layout
    pub const HUD_FONT: &str = "24px Arial";
    pub const HUD_TEXT_X: f32 = 10.0;
    pub const HUD_LINE_Y: [f32; 3] = [30.0, 60.0, 90.0];
    pub const LEVEL_BAR_HEIGHT: f32 = 10.0;
}
