//! Per-frame simulation tick
//!
//! One tick per rendered frame, strictly ordered:
//! lifecycle update -> paddle follow -> physics/collision pass.
//! Nothing runs after physics; the post-update hook has no gameplay work.

use super::lifecycle::update_ball_lifecycle;
use super::physics::step_physics;
use super::state::GameState;
use crate::clamp_paddle_x;

/// Input sampled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x in world units, if the pointer is over the canvas
    pub pointer_x: Option<f32>,
    /// Button went down this frame (not held)
    pub press_edge: bool,
}

/// Turns a held button state into a press edge
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdge {
    was_down: bool,
}

impl ButtonEdge {
    /// Feed the current held state; true only on the frame it goes down
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.was_down;
        self.was_down = down;
        pressed
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frame += 1;

    update_ball_lifecycle(state, input.press_edge);

    if let Some(x) = input.pointer_x {
        move_paddle(state, x);
    }

    step_physics(state);
}

/// Paddle follows the pointer, kept fully inside the level
fn move_paddle(state: &mut GameState, x: f32) {
    let paddle = state.paddle;
    if let Some(body) = state.registry.get_mut(paddle) {
        body.pos.x = clamp_paddle_x(x, body.size.x);
    }
}
