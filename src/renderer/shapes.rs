//! Shape generation for 2D primitives

use glam::Vec2;

use super::draw::{DrawCommand, Frame};
use super::vertex::Vertex;

/// Two triangles covering the axis-aligned box `min..max`
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Screen pixels (y down) to clip space (-1..1, y up)
fn screen_to_clip(screen: Vec2, canvas: Vec2) -> Vec2 {
    Vec2::new(screen.x / canvas.x * 2.0 - 1.0, 1.0 - screen.y / canvas.y * 2.0)
}

/// Flatten every rect in the frame into clip-space triangles, in draw order
///
/// Text is skipped; the host draws it with its own font path.
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.commands.len() * 6);

    for command in &frame.commands {
        let DrawCommand::Rect { center, size, color } = command else {
            continue;
        };
        let half = *size / 2.0;
        // World y-up becomes screen y-down, so the corners swap vertically
        let a = screen_to_clip(frame.world_to_screen(*center - half), frame.canvas);
        let b = screen_to_clip(frame.world_to_screen(*center + half), frame.canvas);
        vertices.extend_from_slice(&quad(a.min(b), a.max(b), color.to_array()));
    }

    vertices
}
