//! Audio system using Web Audio API
//!
//! Effects are synthesized from oscillators, so there are no clip files to load.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::platform::{SoundEffect, SoundSink};
use crate::settings::Settings;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Fails outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Pick up volume/mute changes
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Create an oscillator routed through its own gain node
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Block hit - short crunch with a low thud under it
    fn play_block_hit(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        if let Some((osc, gain)) = self.create_osc(ctx, 440.0, OscillatorType::Sawtooth) {
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(440.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(90.0, t + 0.12)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        if let Some((osc, gain)) = self.create_osc(ctx, 70.0, OscillatorType::Sine) {
            gain.gain().set_value_at_time(vol * 0.5, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.22).ok();
        }
    }

    /// Game over - falling minor arpeggio
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.0, 440.0, 349.0, 262.0, 196.0].iter().enumerate() {
            let t = ctx.current_time() + i as f64 * 0.18;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.35)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }
}

impl SoundSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Browsers suspend the context until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::BlockHit => self.play_block_hit(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
        }
    }
}
