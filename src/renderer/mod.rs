//! Rendering module
//!
//! Produces draw lists for the host renderer: flat background rectangles,
//! one rect per visible body, and the score HUD. Nothing here talks to a GPU;
//! `shapes` flattens rects into vertex data a backend can upload as-is.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawCommand, Frame, render};
pub use vertex::Vertex;
