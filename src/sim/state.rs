//! Game state and core simulation types
//!
//! The body registry stands in for the engine's object list; the rest of
//! `GameState` is the gameplay state the collision policy and ball lifecycle
//! read and write.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effects::ParticleBurst;
use super::level::build_level;
use crate::audio::SoundRequest;
use crate::color::Color;
use crate::tuning::Tuning;

/// Entity kinds the collision policy dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Paddle,
    Wall,
    Ball,
    Brick,
}

/// Stable handle into the body registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// A collidable body (centered box)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Zero mass means static: never moved by physics
    pub mass: f32,
    pub elasticity: f32,
    pub color: Color,
}

impl Body {
    /// A static (zero mass) body
    pub fn fixed(id: BodyId, kind: EntityKind, pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            id,
            kind,
            pos,
            size,
            vel: Vec2::ZERO,
            mass: 0.0,
            elasticity: 0.0,
            color,
        }
    }

    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }
}

/// All live collidable bodies, kept sorted by id for deterministic iteration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_id: u32,
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new body ID
    pub fn next_body_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a body built around a freshly allocated id
    pub fn spawn(&mut self, build: impl FnOnce(BodyId) -> Body) -> BodyId {
        let id = self.next_body_id();
        // Ids are monotonic so pushing keeps the list sorted
        self.bodies.push(build(id));
        id
    }

    /// Remove a body, returning it if it was still registered
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.index_of(id)?;
        Some(self.bodies.remove(idx))
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.index_of(id).map(|i| &self.bodies[i])
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.index_of(id).map(|i| &mut self.bodies[i])
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn kind_of(&self, id: BodyId) -> Option<EntityKind> {
        self.get(id).map(|b| b.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn ids(&self) -> Vec<BodyId> {
        self.bodies.iter().map(|b| b.id).collect()
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.bodies.iter().filter(|b| b.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.binary_search_by_key(&id, |b| b.id).ok()
    }
}

/// Monotonic brick counter, only ever incremented by brick destruction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn read(&self) -> u64 {
        self.0
    }
}

/// Side effects produced by a tick, drained by the host each frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Sound(SoundRequest),
    Explosion(ParticleBurst),
    BallSpawned { id: BodyId },
    BallLost { id: BodyId },
    BrickBroken { id: BodyId, pos: Vec2, color: Color },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed used for brick colors
    pub seed: u64,
    pub tuning: Tuning,
    pub registry: BodyRegistry,
    pub paddle: BodyId,
    /// Current ball; `None` between rounds
    pub ball: Option<BodyId>,
    pub score: Score,
    /// Frames simulated so far
    pub frame: u64,
    /// Pending side effects (not part of saved state)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with reference tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game and populate the level
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut registry = BodyRegistry::new();
        let paddle = build_level(&mut registry, seed);
        log::info!(
            "Level built: {} bricks, seed {}",
            registry.count_kind(EntityKind::Brick),
            seed
        );

        Self {
            seed,
            tuning,
            registry,
            paddle,
            ball: None,
            score: Score::default(),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn bricks_remaining(&self) -> usize {
        self.registry.count_kind(EntityKind::Brick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_registry_spawn_and_remove() {
        let mut registry = BodyRegistry::new();
        let a = registry.spawn(|id| {
            Body::fixed(id, EntityKind::Wall, Vec2::ZERO, Vec2::ONE, Color::TRANSPARENT)
        });
        let b = registry.spawn(|id| {
            Body::fixed(id, EntityKind::Brick, Vec2::ONE, BRICK_SIZE, Color::WHITE)
        });
        assert!(a < b);
        assert_eq!(registry.len(), 2);

        let removed = registry.remove(a).expect("wall registered");
        assert_eq!(removed.kind, EntityKind::Wall);
        assert!(!registry.contains(a));
        assert!(registry.remove(a).is_none());
        assert_eq!(registry.kind_of(b), Some(EntityKind::Brick));
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut score = Score::default();
        assert_eq!(score.read(), 0);
        score.increment();
        score.increment();
        assert_eq!(score.read(), 2);
    }

    #[test]
    fn test_new_game_has_no_ball() {
        let state = GameState::new(1);
        assert!(state.ball.is_none());
        assert_eq!(state.score.read(), 0);
        assert_eq!(state.registry.kind_of(state.paddle), Some(EntityKind::Paddle));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(3);
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.registry.len(), state.registry.len());
        assert_eq!(restored.paddle, state.paddle);
    }
}
