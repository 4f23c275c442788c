//! Shape identifiers and display metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::VertexError;

/// Supported polygon
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ShapeId {
    #[default]
    Triangle,
    Square,
    Pentagon,
    Hexagon,
}

impl ShapeId {
    /// All shapes in selector order
    pub fn all() -> &'static [ShapeId] {
        &[
            ShapeId::Triangle,
            ShapeId::Square,
            ShapeId::Pentagon,
            ShapeId::Hexagon,
        ]
    }

    /// Lowercase identifier
    pub fn key(&self) -> &'static str {
        match self {
            ShapeId::Triangle => "triangle",
            ShapeId::Square => "square",
            ShapeId::Pentagon => "pentagon",
            ShapeId::Hexagon => "hexagon",
        }
    }

    /// Display metadata for this shape
    pub fn info(&self) -> &'static ShapeInfo {
        crate::lookup_info(*self)
    }

    /// Number of vertices this shape has
    pub fn vertex_count(&self) -> usize {
        self.info().vertex_count
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for ShapeId {
    type Err = VertexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeId::all()
            .iter()
            .copied()
            .find(|id| id.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VertexError::UnknownShape(s.to_string()))
    }
}

/// Display metadata for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeInfo {
    /// Singular display name ("Triangle")
    pub name: &'static str,
    /// Plural display name ("Triangles")
    pub plural_name: &'static str,
    /// Expected answer to the vertex question
    pub vertex_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_id() {
        for id in ShapeId::all() {
            assert_eq!(id.key().parse::<ShapeId>(), Ok(*id));
        }
        assert_eq!(" Hexagon ".parse::<ShapeId>(), Ok(ShapeId::Hexagon));
    }

    #[test]
    fn test_parse_unknown_shape() {
        let err = "octagon".parse::<ShapeId>().unwrap_err();
        assert_eq!(err, VertexError::UnknownShape("octagon".to_string()));
        assert_eq!(err.to_string(), "Unknown shape: octagon");
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(ShapeId::Pentagon.to_string(), "Pentagon");
        assert_eq!(ShapeId::default(), ShapeId::Triangle);
    }

    #[test]
    fn test_serde_lowercase() {
        let text = ron::to_string(&ShapeId::Square).unwrap();
        assert_eq!(text, "square");
        let back: ShapeId = ron::from_str("hexagon").unwrap();
        assert_eq!(back, ShapeId::Hexagon);
    }
}
