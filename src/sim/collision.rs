//! Collision policy
//!
//! The engine reports every contact twice, once from each body's point of
//! view. For each orientation the policy decides whether the engine may apply
//! its default elastic reflection, and what (if anything) replaces it.
//!
//! | self  | other  | response                                      |
//! |-------|--------|-----------------------------------------------|
//! | Ball  | Paddle | steered speed-up bounce, default suppressed   |
//! | Brick | Ball   | brick destroyed, score +1, default reflection |
//! | any   | any    | default reflection                            |

use glam::Vec2;

use super::effects::ParticleBurst;
use super::state::{BodyId, EntityKind, GameEvent, GameState};
use crate::audio::{SoundEffect, SoundRequest};
use crate::tuning::Tuning;

/// Outcome of asking the policy about one contact orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionDecision {
    /// Let the engine reflect velocity by its elasticity/mass rules
    UseDefaultResolution,
    /// The policy owns the response; `Some` replaces the reacting body's velocity,
    /// `None` leaves it untouched (the contact is ignored)
    Suppressed(Option<Vec2>),
}

impl CollisionDecision {
    /// The engine's boolean contract: true lets default resolution run
    pub fn allows_default(&self) -> bool {
        matches!(self, CollisionDecision::UseDefaultResolution)
    }
}

/// Result of a successful paddle bounce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleBounce {
    /// New ball velocity
    pub velocity: Vec2,
    /// Speed after the speed-up and cap, drives the bounce sound pitch
    pub speed: f32,
}

/// Velocity transform for a ball meeting the paddle
///
/// Returns `None` when the ball is already moving up, so it can never be
/// caught against the paddle's underside or bounced twice.
pub fn paddle_bounce(velocity: Vec2, ball_x: f32, paddle_x: f32, tuning: &Tuning) -> Option<PaddleBounce> {
    if velocity.y > 0.0 {
        return None;
    }

    // Speed up on every bounce, up to the cap
    let speed = (velocity.length() * tuning.paddle_speed_up).min(tuning.max_ball_speed);
    let v = velocity.normalize_or_zero() * speed;

    // Off-center hits steer the ball
    let delta_x = ball_x - paddle_x;
    let v = Vec2::from_angle(tuning.paddle_steering * delta_x).rotate(v);

    // Always leave upward, at least min_up_speed
    let vy = (-v.y).max(tuning.min_up_speed);

    // The floor can push past the cap; trim horizontal only then
    let max_vx = (tuning.max_ball_speed * tuning.max_ball_speed - vy * vy).max(0.0).sqrt();
    let vx = v.x.clamp(-max_vx, max_vx);

    Some(PaddleBounce {
        velocity: Vec2::new(vx, vy),
        speed,
    })
}

/// Decide the response for `this` touching `other`
///
/// Side effects that belong to the contact itself (brick removal, score,
/// sound and particle events) happen here; velocity changes are only returned.
pub fn resolve_collision(state: &mut GameState, this: BodyId, other: BodyId) -> CollisionDecision {
    let (Some(this_kind), Some(other_kind)) =
        (state.registry.kind_of(this), state.registry.kind_of(other))
    else {
        // One side was destroyed earlier in this pass
        return CollisionDecision::Suppressed(None);
    };

    match (this_kind, other_kind) {
        (EntityKind::Ball, EntityKind::Paddle) => ball_hits_paddle(state, this, other),
        (EntityKind::Brick, EntityKind::Ball) => brick_hit_by_ball(state, this),
        _ => CollisionDecision::UseDefaultResolution,
    }
}

/// Engine-facing entry point: resolve, apply any velocity override, report the boolean
pub fn collide_with_object(state: &mut GameState, this: BodyId, other: BodyId) -> bool {
    let decision = resolve_collision(state, this, other);
    if let CollisionDecision::Suppressed(Some(velocity)) = decision {
        if let Some(body) = state.registry.get_mut(this) {
            body.vel = velocity;
        }
    }
    decision.allows_default()
}

fn ball_hits_paddle(state: &mut GameState, ball: BodyId, paddle: BodyId) -> CollisionDecision {
    let (Some(ball_body), Some(paddle_body)) = (state.registry.get(ball), state.registry.get(paddle))
    else {
        return CollisionDecision::Suppressed(None);
    };
    let ball_pos = ball_body.pos;

    let Some(bounce) = paddle_bounce(ball_body.vel, ball_pos.x, paddle_body.pos.x, &state.tuning)
    else {
        return CollisionDecision::Suppressed(None);
    };

    state.events.push(GameEvent::Sound(
        SoundRequest::at(SoundEffect::Bounce, ball_pos).with_pitch(bounce.speed),
    ));

    CollisionDecision::Suppressed(Some(bounce.velocity))
}

fn brick_hit_by_ball(state: &mut GameState, brick: BodyId) -> CollisionDecision {
    let Some(body) = state.registry.remove(brick) else {
        return CollisionDecision::Suppressed(None);
    };

    state.score.increment();
    log::debug!("Brick {:?} broken at {:?}, score {}", brick, body.pos, state.score.read());

    state.events.push(GameEvent::Sound(SoundRequest::at(SoundEffect::Break, body.pos)));
    state.events.push(GameEvent::Explosion(ParticleBurst::brick_explosion(
        body.pos, body.size, body.color,
    )));
    state.events.push(GameEvent::BrickBroken {
        id: brick,
        pos: body.pos,
        color: body.color,
    });

    // The ball still bounces off the brick it broke
    CollisionDecision::UseDefaultResolution
}
