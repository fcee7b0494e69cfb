//! Data-driven game balance
//!
//! Every value has a reference default, so a partial JSON document only
//! overrides the fields it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ball speed and paddle steering constants (units per frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Multiplier applied to ball speed on every paddle bounce
    pub paddle_speed_up: f32,
    /// Ceiling for ball speed after a paddle bounce
    pub max_ball_speed: f32,
    /// Radians of rotation per unit of offset from the paddle center
    pub paddle_steering: f32,
    /// Minimum upward speed leaving the paddle
    pub min_up_speed: f32,
    /// Ball is lost once its center drops below this y
    pub exit_y: f32,
    /// Velocity of a freshly spawned ball
    pub spawn_velocity: Vec2,
    /// Ball elasticity used by default reflection
    pub ball_elasticity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed_up: 1.04,
            max_ball_speed: 0.5,
            paddle_steering: 0.3,
            min_up_speed: 0.2,
            exit_y: -1.0,
            spawn_velocity: Vec2::new(-0.1, -0.1),
            ball_elasticity: 1.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_ball_speed": 0.8, "spawn_velocity": [0.0, -0.2] }"#)
            .expect("valid tuning");
        assert_eq!(tuning.max_ball_speed, 0.8);
        assert_eq!(tuning.spawn_velocity, Vec2::new(0.0, -0.2));
        assert_eq!(tuning.paddle_speed_up, 1.04);
        assert_eq!(tuning.min_up_speed, 0.2);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ \"max_ball_speed\": \"fast\" }").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(Path::new("/nonexistent/brick-break-tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }
}
