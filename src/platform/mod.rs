//! Platform abstraction layer
//!
//! The simulation only produces events; the host turns them into:
//! - Sounds (fire-and-forget)
//! - On-screen notifications
//! - Frame scheduling (keep requesting frames until the session halts)

pub mod headless;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use session::{FrameControl, Session};

/// Sound effect requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A block hit the player
    BlockHit,
    /// Health ran out
    GameOver,
}

/// Fire-and-forget sound playback
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Transient on-screen messages
pub trait Notifier {
    fn notify(&mut self, message: &str);
}
