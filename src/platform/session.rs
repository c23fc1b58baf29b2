//! Frame orchestration for one play session

use super::{Notifier, SoundEffect, SoundSink};
use crate::renderer::{Surface, draw_frame};
use crate::sim::{GameEvent, GameState, InputState, tick};

/// Shown when the player's speed goes up
pub const SPEEDUP_MESSAGE: &str = "Player speed increased!";

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Halt,
}

/// Owns the game state and the live input flags
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    /// Updated by key handlers between frames
    pub input: InputState,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            state: GameState::new(seed),
            input: InputState::default(),
        }
    }

    /// Run one frame: simulate, draw, then hand events to the host.
    ///
    /// Once the game is over this does nothing and always returns `Halt`.
    pub fn frame(
        &mut self,
        surface: &mut dyn Surface,
        sound: &mut dyn SoundSink,
        notifier: &mut dyn Notifier,
    ) -> FrameControl {
        if self.state.is_game_over() {
            return FrameControl::Halt;
        }

        let input = self.input;
        let events = tick(&mut self.state, &input);
        draw_frame(&self.state, &events, surface);

        for event in &events {
            match event {
                GameEvent::BlockHit { .. } => sound.play(SoundEffect::BlockHit),
                GameEvent::GameOver { .. } => sound.play(SoundEffect::GameOver),
                GameEvent::SpeedUp { .. } => notifier.notify(SPEEDUP_MESSAGE),
                _ => {}
            }
        }

        if self.state.is_game_over() {
            FrameControl::Halt
        } else {
            FrameControl::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::{Block, LEVEL_COLORS};
    use glam::Vec2;

    struct Sounds(Vec<SoundEffect>);

    impl SoundSink for Sounds {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    struct Notes(Vec<String>);

    impl Notifier for Notes {
        fn notify(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn drop_on_player(session: &mut Session, id: u32) {
        let offset = Vec2::new(BLOCK_SIZE / 2.0, BLOCK_SIZE / 2.0 + BLOCK_SPEED);
        let pos = session.state.player.pos - offset;
        session.state.blocks.push(Block::new(id, pos, LEVEL_COLORS[2]));
    }

    #[test]
    fn test_runs_until_game_over_then_halts() {
        let mut session = Session::new(5);
        let mut surface = RecordingSurface::new();
        let mut sounds = Sounds(Vec::new());
        let mut notes = Notes(Vec::new());

        for id in 1..=3 {
            drop_on_player(&mut session, id);
            let control = session.frame(&mut surface, &mut sounds, &mut notes);
            let expected = if id == 3 {
                FrameControl::Halt
            } else {
                FrameControl::Continue
            };
            assert_eq!(control, expected);
        }

        assert_eq!(
            sounds.0,
            vec![
                SoundEffect::BlockHit,
                SoundEffect::BlockHit,
                SoundEffect::BlockHit,
                SoundEffect::GameOver
            ]
        );
        assert!(notes.0.is_empty());
        assert_eq!(surface.texts()[0], "Health: 0");

        // Halted: nothing simulated, nothing drawn
        let score = session.state.score();
        let drawn = surface.commands.len();
        assert_eq!(session.frame(&mut surface, &mut sounds, &mut notes), FrameControl::Halt);
        assert_eq!(session.state.score(), score);
        assert_eq!(surface.commands.len(), drawn);
    }

    #[test]
    fn test_speedup_notifies_once() {
        let mut session = Session::new(5);
        session.state.player.speedup_timer = PLAYER_SPEEDUP_INTERVAL - 1;
        let mut surface = RecordingSurface::new();
        let mut sounds = Sounds(Vec::new());
        let mut notes = Notes(Vec::new());

        session.frame(&mut surface, &mut sounds, &mut notes);
        session.frame(&mut surface, &mut sounds, &mut notes);

        assert_eq!(notes.0, vec![SPEEDUP_MESSAGE.to_string()]);
    }

    #[test]
    fn test_input_flags_drive_player() {
        let mut session = Session::new(5);
        session.input.move_right = true;
        let mut surface = RecordingSurface::new();
        let mut sounds = Sounds(Vec::new());
        let mut notes = Notes(Vec::new());

        session.frame(&mut surface, &mut sounds, &mut notes);
        assert_eq!(session.state.player.pos.x, GAME_WIDTH / 2.0 + PLAYER_START_SPEED);
    }
}
