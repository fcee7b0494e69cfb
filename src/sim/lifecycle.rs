//! Ball lifecycle
//!
//! Two states: no ball (`Absent`) or one ball in flight (`Active`). A press
//! edge spawns a ball at the level center; falling below the exit line
//! removes it. The machine cycles for the life of the game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Body, BodyId, EntityKind, GameEvent, GameState};
use crate::audio::{SoundEffect, SoundRequest};
use crate::color::Color;
use crate::consts::*;

/// Lifecycle state derived from the current ball handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    Absent,
    Active(BodyId),
}

impl BallPhase {
    pub fn of(state: &GameState) -> Self {
        match state.ball {
            Some(id) => BallPhase::Active(id),
            None => BallPhase::Absent,
        }
    }
}

/// Run lifecycle transitions for one frame: exit check first, then spawn check
pub fn update_ball_lifecycle(state: &mut GameState, press_edge: bool) {
    despawn_lost_ball(state);

    if state.ball.is_none() && press_edge {
        spawn_ball(state);
    }
}

/// Remove the ball once it has dropped out of the open bottom
fn despawn_lost_ball(state: &mut GameState) {
    let Some(id) = state.ball else { return };

    let lost = match state.registry.get(id) {
        Some(ball) => ball.pos.y < state.tuning.exit_y,
        // Handle no longer points at a live body
        None => true,
    };
    if !lost {
        return;
    }

    state.registry.remove(id);
    state.ball = None;
    state.events.push(GameEvent::BallLost { id });
    log::info!("Ball lost (score {})", state.score.read());
}

/// Spawn point for new balls
pub fn spawn_point() -> Vec2 {
    CAMERA_POS
}

/// Create a new ball at the level center heading down-left
fn spawn_ball(state: &mut GameState) {
    let pos = spawn_point();
    let vel = state.tuning.spawn_velocity;
    let elasticity = state.tuning.ball_elasticity;
    let id = state.registry.spawn(|id| Body {
        vel,
        mass: 1.0,
        elasticity,
        ..Body::fixed(id, EntityKind::Ball, pos, BALL_SIZE, Color::WHITE)
    });

    state.ball = Some(id);
    state.events.push(GameEvent::BallSpawned { id });
    state.events.push(GameEvent::Sound(SoundRequest::global(SoundEffect::Start)));
    log::info!("Ball launched from {:?}", pos);
}
