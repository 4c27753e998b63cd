//! Sound cues
//!
//! Three fire-and-forget cues: crash, coin and fuel. The browser build
//! synthesizes them with Web Audio oscillators, so no sound files are needed.
//! Elsewhere cues are only logged.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Car hits an obstacle
    Crash,
    /// Coin collected
    Coin,
    /// Fuel canister collected
    Fuel,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Crash => SoundEffect::Crash,
            GameEvent::CoinCollected => SoundEffect::Coin,
            GameEvent::FuelCollected => SoundEffect::Fuel,
        }
    }
}

/// Anything that can play a cue without blocking the frame
pub trait CuePlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Volume controls shared by every audio backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for Mixer {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Mixer {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut mixer = Self::default();
        mixer.set_master_volume(settings.master_volume);
        mixer.set_sfx_volume(settings.sfx_volume);
        mixer.set_muted(settings.muted);
        mixer
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Gain actually applied to cues
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

/// Player for hosts without audio output
#[derive(Debug, Default)]
pub struct NullAudio {
    played: u64,
}

impl NullAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues requested so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl CuePlayer for NullAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::trace!("cue: {:?}", effect);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{CuePlayer, Mixer, SoundEffect};

    /// Web Audio cue player
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        mixer: Mixer,
    }

    impl AudioManager {
        pub fn new(mixer: Mixer) -> Self {
            // Fails outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, mixer }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

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

        /// Crash - low sawtooth thud with a metallic crack on top
        fn play_crash(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 110.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.45, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.frequency().set_value_at_time(110.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(35.0, t + 0.3)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.35).ok();
            }

            if let Some((osc, gain)) = self.create_osc(ctx, 1200.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.15, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.1).ok();
            }
        }

        /// Coin - two quick rising chimes
        fn play_coin(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [988.0, 1319.0].iter().enumerate() {
                let delay = i as f64 * 0.07;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.2, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.18)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Fuel - bubbling upward sweep
        fn play_fuel(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.35, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                .ok();
            osc.frequency().set_value_at_time(220.0, t).ok();
            osc.frequency().set_value_at_time(330.0, t + 0.08).ok();
            osc.frequency().set_value_at_time(280.0, t + 0.14).ok();
            osc.frequency().set_value_at_time(440.0, t + 0.22).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(660.0, t + 0.35)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.4).ok();
        }
    }

    impl CuePlayer for AudioManager {
        fn play(&mut self, effect: SoundEffect) {
            let vol = self.mixer.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Crash => self.play_crash(ctx, vol),
                SoundEffect::Coin => self.play_coin(ctx, vol),
                SoundEffect::Fuel => self.play_fuel(ctx, vol),
            }
        }
    }
}
