//! Error types for contract violations at the core boundary

use thiserror::Error;

use crate::ShapeId;

/// Errors raised when a caller breaks the catalog contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VertexError {
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Vertex index {index} out of range for {shape} ({vertex_count} vertices)")]
    VertexIndexOutOfRange {
        shape: ShapeId,
        index: usize,
        vertex_count: usize,
    },
}
