//! Minimal frame-stepped physics pass
//!
//! Stands in for the host engine's broad/narrow phase: integrate the ball,
//! find every body its box overlaps, and consult the collision policy from
//! both sides before applying default elastic reflection.

use glam::Vec2;

use super::collision::collide_with_object;
use super::state::{Body, BodyId, GameState};
use crate::boxes_overlap;

/// Static body snapshot taken before the policy runs (the policy may remove it)
#[derive(Debug, Clone, Copy)]
struct Obstacle {
    pos: Vec2,
    size: Vec2,
    elasticity: f32,
}

/// Advance the ball one frame and resolve its contacts in registry order
pub fn step_physics(state: &mut GameState) {
    let Some(ball_id) = state.ball else { return };
    let Some(ball) = state.registry.get_mut(ball_id) else { return };

    let old_pos = ball.pos;
    ball.pos += ball.vel;

    let mut flipped = (false, false);
    for other in state.registry.ids() {
        if other == ball_id {
            continue;
        }
        let Some(obstacle) = touching(state, ball_id, other) else {
            continue;
        };

        // Both sides always get a say, even once one has refused
        let ball_allows = collide_with_object(state, ball_id, other);
        let other_allows = collide_with_object(state, other, ball_id);
        if !(ball_allows && other_allows) {
            continue;
        }

        if let Some(ball) = state.registry.get_mut(ball_id) {
            reflect(ball, old_pos, &obstacle, &mut flipped);
        }
    }
}

/// Overlap test between the ball and a live body
fn touching(state: &GameState, ball_id: BodyId, other: BodyId) -> Option<Obstacle> {
    let ball = state.registry.get(ball_id)?;
    let body = state.registry.get(other)?;
    boxes_overlap(ball.pos, ball.size, body.pos, body.size).then_some(Obstacle {
        pos: body.pos,
        size: body.size,
        elasticity: body.elasticity,
    })
}

/// Elastic reflection off a static box
///
/// The blocked axis is the one the ball was already overlapping on before
/// this step; that axis is rewound and its velocity negated. Each axis flips
/// at most once per step so two adjacent bricks cannot cancel each other.
fn reflect(ball: &mut Body, old_pos: Vec2, obstacle: &Obstacle, flipped: &mut (bool, bool)) {
    let reach = ball.size + obstacle.size;
    let blocked_x = (old_pos.y - obstacle.pos.y).abs() * 2.0 < reach.y;
    let blocked_y = (old_pos.x - obstacle.pos.x).abs() * 2.0 < reach.x;
    let elasticity = ball.elasticity.max(obstacle.elasticity);

    // Corner approach (neither axis overlapped before) reflects vertically
    if blocked_y || !blocked_x {
        ball.pos.y = old_pos.y;
        if !flipped.1 {
            ball.vel.y *= -elasticity;
            flipped.1 = true;
        }
    }
    if blocked_x {
        ball.pos.x = old_pos.x;
        if !flipped.0 {
            ball.vel.x *= -elasticity;
            flipped.0 = true;
        }
    }
}
