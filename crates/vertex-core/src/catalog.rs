//! Static shape catalog
//!
//! Geometry is expressed in canvas units on a square canvas of
//! [`CANVAS_SIZE`] units, y pointing down. Each polygon lists its
//! vertices in drawing order.

use glam::Vec2;

use crate::{ShapeId, ShapeInfo};

/// Side length of the logical canvas the catalog geometry lives on
pub const CANVAS_SIZE: f32 = 400.0;

/// Polygon outline for a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeGeometry {
    /// Vertices in drawing order
    pub points: &'static [Vec2],
}

impl ShapeGeometry {
    /// Number of vertices in the outline
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }

    /// Mean of the vertices
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        self.points.iter().copied().sum::<Vec2>() / self.points.len() as f32
    }

    /// Boundary edges, including the one closing the polygon
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

static TRIANGLE_INFO: ShapeInfo = ShapeInfo {
    name: "Triangle",
    plural_name: "Triangles",
    vertex_count: 3,
};

static SQUARE_INFO: ShapeInfo = ShapeInfo {
    name: "Square",
    plural_name: "Squares",
    vertex_count: 4,
};

static PENTAGON_INFO: ShapeInfo = ShapeInfo {
    name: "Pentagon",
    plural_name: "Pentagons",
    vertex_count: 5,
};

static HEXAGON_INFO: ShapeInfo = ShapeInfo {
    name: "Hexagon",
    plural_name: "Hexagons",
    vertex_count: 6,
};

static TRIANGLE: ShapeGeometry = ShapeGeometry {
    points: &[
        Vec2::new(200.0, 100.0),
        Vec2::new(100.0, 300.0),
        Vec2::new(300.0, 300.0),
    ],
};

static SQUARE: ShapeGeometry = ShapeGeometry {
    points: &[
        Vec2::new(150.0, 150.0),
        Vec2::new(250.0, 150.0),
        Vec2::new(250.0, 250.0),
        Vec2::new(150.0, 250.0),
    ],
};

static PENTAGON: ShapeGeometry = ShapeGeometry {
    points: &[
        Vec2::new(200.0, 100.0),
        Vec2::new(280.0, 160.0),
        Vec2::new(250.0, 250.0),
        Vec2::new(150.0, 250.0),
        Vec2::new(120.0, 160.0),
    ],
};

static HEXAGON: ShapeGeometry = ShapeGeometry {
    points: &[
        Vec2::new(200.0, 100.0),
        Vec2::new(280.0, 150.0),
        Vec2::new(280.0, 250.0),
        Vec2::new(200.0, 300.0),
        Vec2::new(120.0, 250.0),
        Vec2::new(120.0, 150.0),
    ],
};

/// Display metadata for a shape
pub fn lookup_info(id: ShapeId) -> &'static ShapeInfo {
    match id {
        ShapeId::Triangle => &TRIANGLE_INFO,
        ShapeId::Square => &SQUARE_INFO,
        ShapeId::Pentagon => &PENTAGON_INFO,
        ShapeId::Hexagon => &HEXAGON_INFO,
    }
}

/// Outline geometry for a shape
pub fn lookup_geometry(id: ShapeId) -> &'static ShapeGeometry {
    match id {
        ShapeId::Triangle => &TRIANGLE,
        ShapeId::Square => &SQUARE,
        ShapeId::Pentagon => &PENTAGON,
        ShapeId::Hexagon => &HEXAGON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_matches_vertex_count() {
        for id in ShapeId::all() {
            assert_eq!(
                lookup_geometry(*id).len(),
                lookup_info(*id).vertex_count,
                "{id} geometry disagrees with its info"
            );
        }
    }

    #[test]
    fn test_vertex_counts() {
        assert_eq!(ShapeId::Triangle.vertex_count(), 3);
        assert_eq!(ShapeId::Square.vertex_count(), 4);
        assert_eq!(ShapeId::Pentagon.vertex_count(), 5);
        assert_eq!(ShapeId::Hexagon.vertex_count(), 6);
        assert_eq!(lookup_info(ShapeId::Hexagon).plural_name, "Hexagons");
    }

    #[test]
    fn test_points_inside_canvas() {
        for id in ShapeId::all() {
            let (min, max) = lookup_geometry(*id).bounds();
            assert!(min.cmpge(Vec2::ZERO).all());
            assert!(max.cmple(Vec2::splat(CANVAS_SIZE)).all());
        }
    }

    #[test]
    fn test_square_bounds_and_centroid() {
        let square = lookup_geometry(ShapeId::Square);
        assert_eq!(square.bounds(), (Vec2::splat(150.0), Vec2::splat(250.0)));
        assert_eq!(square.centroid(), Vec2::splat(200.0));
    }

    #[test]
    fn test_edges_close_polygon() {
        let triangle = lookup_geometry(ShapeId::Triangle);
        let edges: Vec<_> = triangle.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (triangle.points[2], triangle.points[0]));
    }
}
