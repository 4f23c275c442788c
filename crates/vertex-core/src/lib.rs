//! Polygon Vertex Explorer Core
//!
//! This crate contains the logic behind the vertex explorer widget:
//! - ShapeId / ShapeInfo: the supported polygons and their display metadata
//! - Catalog: static geometry for each polygon
//! - InteractionState: selection, highlighted vertices and answer checking
//! - Answer parsing with leading-integer semantics

pub mod answer;
pub mod catalog;
pub mod error;
pub mod shape;
pub mod state;

pub use answer::*;
pub use catalog::*;
pub use error::*;
pub use shape::*;
pub use state::*;
