//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (clip space) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        let verts = [Vertex::new(1.0, 2.0, [0.1, 0.2, 0.3, 1.0]); 3];
        assert_eq!(as_bytes(&verts).len(), 3 * Vertex::STRIDE);
    }
}
