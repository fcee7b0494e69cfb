//! Level construction
//!
//! A grid of randomly colored bricks across the top, the paddle near the
//! bottom, and three invisible walls. The bottom edge is left open so the ball
//! can fall out.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{Body, BodyId, BodyRegistry, EntityKind};
use crate::clamp_paddle_x;
use crate::color::Color;
use crate::consts::*;

/// Brick centers, row by row within each column
pub fn brick_positions() -> Vec<Vec2> {
    let mut positions = Vec::new();
    let mut x = BRICK_MARGIN;
    while x <= LEVEL_SIZE.x - BRICK_MARGIN {
        let mut y = BRICK_FIRST_ROW_Y;
        while y <= LEVEL_SIZE.y - BRICK_MARGIN {
            positions.push(Vec2::new(x, y));
            y += BRICK_SIZE.y;
        }
        x += BRICK_SIZE.x;
    }
    positions
}

/// Left, right and top walls as (center, size)
pub fn wall_layout() -> [(Vec2, Vec2); 3] {
    let vertical = Vec2::new(WALL_THICKNESS, WALL_LENGTH);
    let horizontal = Vec2::new(WALL_LENGTH, WALL_THICKNESS);
    let half = WALL_THICKNESS / 2.0;
    [
        (Vec2::new(-half, LEVEL_SIZE.y / 2.0), vertical),
        (Vec2::new(LEVEL_SIZE.x + half, LEVEL_SIZE.y / 2.0), vertical),
        (Vec2::new(LEVEL_SIZE.x / 2.0, LEVEL_SIZE.y + half), horizontal),
    ]
}

/// Populate the registry with bricks, paddle and walls; returns the paddle id
pub fn build_level(registry: &mut BodyRegistry, seed: u64) -> BodyId {
    let mut rng = Pcg32::seed_from_u64(seed);

    for pos in brick_positions() {
        let color = Color::random(&mut rng);
        registry.spawn(|id| Body::fixed(id, EntityKind::Brick, pos, BRICK_SIZE, color));
    }

    let paddle_pos = Vec2::new(clamp_paddle_x(0.0, PADDLE_SIZE.x), PADDLE_Y);
    let paddle = registry.spawn(|id| {
        Body::fixed(id, EntityKind::Paddle, paddle_pos, PADDLE_SIZE, Color::WHITE)
    });

    for (pos, size) in wall_layout() {
        registry.spawn(|id| Body::fixed(id, EntityKind::Wall, pos, size, Color::TRANSPARENT));
    }

    paddle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_grid() {
        let positions = brick_positions();
        // 18 columns (x = 2..=36) by 7 rows (y = 12..=18)
        assert_eq!(positions.len(), 18 * 7);
        assert_eq!(positions[0], Vec2::new(2.0, 12.0));
        assert_eq!(*positions.last().unwrap(), Vec2::new(36.0, 18.0));
    }

    #[test]
    fn test_build_level() {
        let mut registry = BodyRegistry::new();
        let paddle = build_level(&mut registry, 42);

        assert_eq!(registry.count_kind(EntityKind::Brick), 126);
        assert_eq!(registry.count_kind(EntityKind::Wall), 3);
        assert_eq!(registry.count_kind(EntityKind::Paddle), 1);

        let paddle = registry.get(paddle).unwrap();
        assert_eq!(paddle.pos, Vec2::new(3.0, 1.0));
        assert!(paddle.is_static());

        // Walls are invisible, bricks opaque
        for body in registry.iter() {
            match body.kind {
                EntityKind::Wall => assert!(!body.color.is_visible()),
                EntityKind::Brick => assert_eq!(body.color.a, 1.0),
                _ => {}
            }
        }
    }

    #[test]
    fn test_bottom_is_open() {
        // The only wall spanning the level's width sits above it
        let spanning: Vec<_> = wall_layout()
            .into_iter()
            .filter(|(_, size)| size.x > LEVEL_SIZE.x)
            .collect();
        assert_eq!(spanning.len(), 1);
        assert!(spanning[0].0.y > LEVEL_SIZE.y);
    }

    #[test]
    fn test_same_seed_same_colors() {
        let mut a = BodyRegistry::new();
        let mut b = BodyRegistry::new();
        build_level(&mut a, 9);
        build_level(&mut b, 9);
        let colors_a: Vec<_> = a.iter().map(|body| body.color).collect();
        let colors_b: Vec<_> = b.iter().map(|body| body.color).collect();
        assert_eq!(colors_a, colors_b);
    }
}
