//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, velocities in units per frame
//! - Seeded RNG only
//! - Stable iteration order (by body ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod level;
pub mod lifecycle;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{CollisionDecision, PaddleBounce, collide_with_object, paddle_bounce, resolve_collision};
pub use effects::ParticleBurst;
pub use level::build_level;
pub use lifecycle::{BallPhase, update_ball_lifecycle};
pub use physics::step_physics;
pub use state::{Body, BodyId, BodyRegistry, EntityKind, GameEvent, GameState, Score};
pub use tick::{ButtonEdge, TickInput, tick};
