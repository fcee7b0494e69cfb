//! Frame draw lists
//!
//! Draw order matches the frame: background, then bodies, then the HUD on top.

use glam::Vec2;

use crate::color::Color;
use crate::consts::*;
use crate::sim::GameState;

/// Backdrop behind the level
pub const BACKGROUND_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);
pub const BACKGROUND_SIZE: Vec2 = Vec2::splat(100.0);
/// Play area fill
pub const LEVEL_COLOR: Color = Color::rgb(0.1, 0.1, 0.1);

/// HUD score text placement (pixels from the top-left)
pub const SCORE_TEXT_Y: f32 = 70.0;
pub const SCORE_TEXT_SIZE: f32 = 50.0;

/// One primitive for the host renderer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rect in world units, centered on `center`
    Rect { center: Vec2, size: Vec2, color: Color },
    /// Centered text in screen pixels
    ScreenText {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Everything to draw for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    /// World position at the canvas center
    pub camera: Vec2,
    /// Pixels per world unit
    pub camera_scale: f32,
    /// Canvas size in pixels
    pub canvas: Vec2,
}

impl Frame {
    pub fn new(camera: Vec2, canvas: Vec2) -> Self {
        Self {
            commands: Vec::new(),
            camera,
            camera_scale: CAMERA_SCALE,
            canvas,
        }
    }

    pub fn rect(&mut self, center: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { center, size, color });
    }

    pub fn screen_text(&mut self, text: impl Into<String>, pos: Vec2, size: f32) {
        self.commands.push(DrawCommand::ScreenText {
            text: text.into(),
            pos,
            size,
            color: Color::WHITE,
        });
    }

    /// World units to screen pixels (y down)
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let offset = (world - self.camera) * self.camera_scale;
        Vec2::new(self.canvas.x / 2.0 + offset.x, self.canvas.y / 2.0 - offset.y)
    }
}

/// Build the draw list for the current state
pub fn render(state: &GameState) -> Frame {
    let mut frame = Frame::new(CAMERA_POS, CANVAS_SIZE);
    render_background(&mut frame);
    render_bodies(state, &mut frame);
    render_hud(state, &mut frame);
    frame
}

/// Backdrop and level boundary, drawn before any body
fn render_background(frame: &mut Frame) {
    frame.rect(CAMERA_POS, BACKGROUND_SIZE, BACKGROUND_COLOR);
    frame.rect(CAMERA_POS, LEVEL_SIZE, LEVEL_COLOR);
}

fn render_bodies(state: &GameState, frame: &mut Frame) {
    for body in state.registry.iter().filter(|b| b.color.is_visible()) {
        frame.rect(body.pos, body.size, body.color);
    }
}

/// Score text over everything else
fn render_hud(state: &GameState, frame: &mut Frame) {
    let pos = Vec2::new(frame.canvas.x / 2.0, SCORE_TEXT_Y);
    frame.screen_text(format!("Score {}", state.score.read()), pos, SCORE_TEXT_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EntityKind;

    #[test]
    fn test_background_first_hud_last() {
        let mut state = GameState::new(1);
        state.score.increment();
        let frame = render(&state);

        assert_eq!(
            frame.commands[0],
            DrawCommand::Rect {
                center: Vec2::new(19.0, 10.0),
                size: Vec2::splat(100.0),
                color: BACKGROUND_COLOR,
            }
        );
        assert_eq!(
            frame.commands[1],
            DrawCommand::Rect {
                center: Vec2::new(19.0, 10.0),
                size: Vec2::new(38.0, 20.0),
                color: LEVEL_COLOR,
            }
        );
        assert_eq!(
            frame.commands.last(),
            Some(&DrawCommand::ScreenText {
                text: "Score 1".to_string(),
                pos: Vec2::new(640.0, 70.0),
                size: 50.0,
                color: Color::WHITE,
            })
        );
    }

    #[test]
    fn test_walls_are_not_drawn() {
        let state = GameState::new(1);
        let frame = render(&state);
        let visible = state
            .registry
            .iter()
            .filter(|b| b.kind != EntityKind::Wall)
            .count();
        // Two background rects, one per visible body, one HUD line
        assert_eq!(frame.commands.len(), 2 + visible + 1);
    }

    #[test]
    fn test_world_to_screen() {
        let frame = Frame::new(CAMERA_POS, CANVAS_SIZE);
        assert_eq!(frame.world_to_screen(CAMERA_POS), Vec2::new(640.0, 360.0));
        // One unit up and right of the camera
        assert_eq!(
            frame.world_to_screen(CAMERA_POS + Vec2::ONE),
            Vec2::new(672.0, 328.0)
        );
    }
}
