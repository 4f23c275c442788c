//! Vertex picking

use glam::Vec2;

use vertex_core::ShapeGeometry;

/// Default pick radius in canvas units, a little larger than the
/// highlighted marker so small markers are easy to hit
pub const DEFAULT_PICK_RADIUS: f32 = 12.0;

/// Find the vertex closest to `canvas_pos` within `pick_radius`.
///
/// Ties resolve to the lowest index.
pub fn pick_vertex(geometry: &ShapeGeometry, canvas_pos: Vec2, pick_radius: f32) -> Option<usize> {
    let mut closest: Option<(usize, f32)> = None;

    for (index, point) in geometry.points.iter().enumerate() {
        let dist = point.distance(canvas_pos);
        if dist <= pick_radius && closest.is_none_or(|(_, best)| dist < best) {
            closest = Some((index, dist));
        }
    }

    if let Some((index, dist)) = closest {
        tracing::trace!("Picked vertex {} at distance {:.1}", index, dist);
    }
    closest.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertex_core::{ShapeId, lookup_geometry};

    #[test]
    fn test_pick_exact_vertex() {
        let geometry = lookup_geometry(ShapeId::Hexagon);
        for (index, point) in geometry.points.iter().enumerate() {
            assert_eq!(pick_vertex(geometry, *point, DEFAULT_PICK_RADIUS), Some(index));
        }
    }

    #[test]
    fn test_pick_near_vertex() {
        let geometry = lookup_geometry(ShapeId::Triangle);
        let near = Vec2::new(103.0, 296.0);
        assert_eq!(pick_vertex(geometry, near, DEFAULT_PICK_RADIUS), Some(1));
    }

    #[test]
    fn test_miss_inside_polygon() {
        let geometry = lookup_geometry(ShapeId::Square);
        assert_eq!(
            pick_vertex(geometry, geometry.centroid(), DEFAULT_PICK_RADIUS),
            None
        );
    }

    #[test]
    fn test_tie_prefers_lowest_index() {
        let geometry = lookup_geometry(ShapeId::Square);
        // Midpoint of the top edge, equidistant from vertices 0 and 1
        let mid = Vec2::new(200.0, 150.0);
        assert_eq!(pick_vertex(geometry, mid, 60.0), Some(0));
    }
}
