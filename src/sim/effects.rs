//! Particle burst descriptions handed to the host particle system

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::color::Color;

/// One-shot particle emitter parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleBurst {
    pub pos: Vec2,
    pub angle: f32,
    /// Emitter box size
    pub emit_size: Vec2,
    /// Seconds the emitter stays alive
    pub emit_time: f32,
    /// Particles per second
    pub emit_rate: f32,
    /// Spread of emission direction (radians)
    pub emit_cone: f32,
    pub color_start: Color,
    pub color_end: Color,
    /// Seconds each particle lives
    pub particle_time: f32,
    pub size_start: f32,
    pub size_end: f32,
    pub speed: f32,
    pub angle_speed: f32,
    pub damping: f32,
    pub angle_damping: f32,
    pub gravity_scale: f32,
    pub particle_cone: f32,
    pub fade_rate: f32,
    pub randomness: f32,
    pub collide: bool,
    pub additive: bool,
}

impl ParticleBurst {
    /// Explosion left behind by a broken brick: its color fading to transparent
    pub fn brick_explosion(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            pos,
            angle: 0.0,
            emit_size: size,
            emit_time: 0.1,
            emit_rate: 200.0,
            emit_cone: PI,
            color_start: color,
            color_end: color.scale(1.0, 0.0),
            particle_time: 0.2,
            size_start: 0.5,
            size_end: 1.0,
            speed: 0.1,
            angle_speed: 0.1,
            damping: 0.99,
            angle_damping: 0.95,
            gravity_scale: 0.4,
            particle_cone: PI,
            fade_rate: 0.1,
            randomness: 0.5,
            collide: false,
            additive: true,
        }
    }

    /// Total particles the emitter produces over its lifetime
    pub fn particle_count(&self) -> u32 {
        (self.emit_rate * self.emit_time).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_explosion_fades_brick_color() {
        let color = Color::rgb(0.9, 0.1, 0.3);
        let burst = ParticleBurst::brick_explosion(Vec2::new(4.0, 12.0), Vec2::new(2.0, 1.0), color);
        assert_eq!(burst.pos, Vec2::new(4.0, 12.0));
        assert_eq!(burst.color_start, color);
        assert_eq!(burst.color_end, Color::new(0.9, 0.1, 0.3, 0.0));
        assert_eq!(burst.emit_size, Vec2::new(2.0, 1.0));
        assert_eq!(burst.particle_count(), 20);
    }
}
