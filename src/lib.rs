//! Brick Break - Breakout rules over a frame-stepped 2D engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision policy, ball lifecycle, score)
//! - `renderer`: Background/HUD draw lists for the host renderer
//! - `audio`: Sound effect descriptions for the host synthesizer
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod color;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play area size in world units
    pub const LEVEL_SIZE: Vec2 = Vec2::new(38.0, 20.0);
    /// Camera sits at the level center
    pub const CAMERA_POS: Vec2 = Vec2::new(LEVEL_SIZE.x / 2.0, LEVEL_SIZE.y / 2.0);
    /// Fixed canvas size in pixels (720p)
    pub const CANVAS_SIZE: Vec2 = Vec2::new(1280.0, 720.0);
    /// Pixels per world unit
    pub const CAMERA_SCALE: f32 = 32.0;

    /// Paddle defaults
    pub const PADDLE_Y: f32 = 1.0;
    pub const PADDLE_SIZE: Vec2 = Vec2::new(6.0, 0.5);

    /// Ball defaults
    pub const BALL_SIZE: Vec2 = Vec2::splat(0.5);

    /// Brick grid: columns at x = 2, 4, ... LEVEL_SIZE.x - 2
    pub const BRICK_SIZE: Vec2 = Vec2::new(2.0, 1.0);
    pub const BRICK_FIRST_ROW_Y: f32 = 12.0;
    /// Bricks stop this far from the level edges
    pub const BRICK_MARGIN: f32 = 2.0;

    /// Walls are thin slabs just outside the level; the bottom stays open
    pub const WALL_THICKNESS: f32 = 1.0;
    pub const WALL_LENGTH: f32 = 100.0;
}

/// Clamp a paddle center so the whole paddle stays inside the level
#[inline]
pub fn clamp_paddle_x(x: f32, paddle_width: f32) -> f32 {
    let half = paddle_width / 2.0;
    x.clamp(half, consts::LEVEL_SIZE.x - half)
}

/// Axis-aligned box overlap test for centered boxes
#[inline]
pub fn boxes_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    let delta = (pos_a - pos_b).abs() * 2.0;
    let reach = size_a + size_b;
    delta.x < reach.x && delta.y < reach.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_paddle_x() {
        assert_eq!(clamp_paddle_x(0.0, 6.0), 3.0);
        assert_eq!(clamp_paddle_x(50.0, 6.0), 35.0);
        assert_eq!(clamp_paddle_x(12.5, 6.0), 12.5);
    }

    #[test]
    fn test_boxes_overlap() {
        let one = Vec2::ONE;
        assert!(boxes_overlap(Vec2::ZERO, one, Vec2::new(0.9, 0.0), one));
        assert!(!boxes_overlap(Vec2::ZERO, one, Vec2::new(1.0, 0.0), one));
        assert!(!boxes_overlap(Vec2::ZERO, one, Vec2::new(0.5, 1.5), one));
    }
}
