//! Sound effect descriptions
//!
//! Procedurally generated sound effects - no external files needed! The host
//! engine owns synthesis and playback; the game only says which effect to play,
//! where, and how loud/high.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball bounces off the paddle
    Bounce,
    /// Brick breaks
    Break,
    /// New ball launched
    Start,
}

/// ZzFX-style synthesis parameters (times in seconds, frequencies in Hz)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZzfxParams {
    pub volume: f32,
    pub randomness: f32,
    pub frequency: f32,
    pub attack: f32,
    pub sustain: f32,
    pub release: f32,
    /// 0 sin, 1 triangle, 2 saw, 3 tan, 4 noise
    pub shape: u8,
    pub shape_curve: f32,
    pub slide: f32,
    pub delta_slide: f32,
    pub pitch_jump: f32,
    pub pitch_jump_time: f32,
    pub repeat_time: f32,
    pub noise: f32,
    pub modulation: f32,
    pub bit_crush: f32,
    pub delay: f32,
    pub sustain_volume: f32,
    pub decay: f32,
    pub tremolo: f32,
}

impl Default for ZzfxParams {
    fn default() -> Self {
        Self {
            volume: 1.0,
            randomness: 0.05,
            frequency: 220.0,
            attack: 0.0,
            sustain: 0.0,
            release: 0.1,
            shape: 0,
            shape_curve: 1.0,
            slide: 0.0,
            delta_slide: 0.0,
            pitch_jump: 0.0,
            pitch_jump_time: 0.0,
            repeat_time: 0.0,
            noise: 0.0,
            modulation: 0.0,
            bit_crush: 0.0,
            delay: 0.0,
            sustain_volume: 1.0,
            decay: 0.0,
            tremolo: 0.0,
        }
    }
}

/// Default audible range (world units) for effects that attenuate with distance
pub const DEFAULT_SOUND_RANGE: f32 = 40.0;

impl SoundEffect {
    /// Synthesis parameters for this effect
    pub fn params(self) -> ZzfxParams {
        match self {
            // Short triangle blip with a pitch jump
            SoundEffect::Bounce => ZzfxParams {
                frequency: 1000.0,
                sustain: 0.03,
                release: 0.02,
                shape: 1,
                shape_curve: 2.0,
                pitch_jump: 940.0,
                pitch_jump_time: 0.03,
                delay: 0.2,
                sustain_volume: 0.6,
                tremolo: 0.06,
                ..Default::default()
            },
            // Low crunchy noise burst
            SoundEffect::Break => ZzfxParams {
                frequency: 90.0,
                sustain: 0.01,
                release: 0.03,
                shape: 4,
                noise: 9.0,
                modulation: 50.0,
                bit_crush: 0.2,
                sustain_volume: 0.2,
                decay: 0.01,
                ..Default::default()
            },
            SoundEffect::Start => ZzfxParams {
                randomness: 0.0,
                frequency: 500.0,
                sustain: 0.04,
                release: 0.3,
                shape: 1,
                shape_curve: 2.0,
                pitch_jump: 570.0,
                pitch_jump_time: 0.02,
                repeat_time: 0.02,
                delay: 0.04,
                ..Default::default()
            },
        }
    }

    /// Distance attenuation range; 0 plays at full volume everywhere
    pub fn range(self) -> f32 {
        match self {
            SoundEffect::Bounce | SoundEffect::Break => 0.0,
            SoundEffect::Start => DEFAULT_SOUND_RANGE,
        }
    }
}

/// A request for the host to play an effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundRequest {
    pub effect: SoundEffect,
    /// World position, `None` for global playback
    pub pos: Option<Vec2>,
    pub volume: f32,
    /// Playback rate multiplier
    pub pitch: f32,
    /// Attenuation range, see [`SoundEffect::range`]
    pub range: f32,
}

impl SoundRequest {
    /// Positional playback at default volume and pitch
    pub fn at(effect: SoundEffect, pos: Vec2) -> Self {
        Self {
            effect,
            pos: Some(pos),
            volume: 1.0,
            pitch: 1.0,
            range: effect.range(),
        }
    }

    /// Global (non-positional) playback
    pub fn global(effect: SoundEffect) -> Self {
        Self {
            effect,
            pos: None,
            volume: 1.0,
            pitch: 1.0,
            range: effect.range(),
        }
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }
}
