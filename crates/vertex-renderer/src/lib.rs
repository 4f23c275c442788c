//! Polygon Vertex Explorer Renderer
//!
//! Turns catalog geometry and highlight state into draw lists that any
//! immediate-mode painter can consume, and maps pointer positions back to
//! vertex indices.

pub mod colors;
pub mod draw;
pub mod picking;
pub mod transform;

pub use draw::*;
pub use picking::*;
pub use transform::*;
