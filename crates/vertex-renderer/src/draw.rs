//! Draw list construction

use glam::Vec2;

use vertex_core::ShapeGeometry;

use crate::CanvasTransform;
use crate::colors;

/// Distance in canvas units between a vertex and its index label
pub const LABEL_OFFSET: f32 = 18.0;

/// Visual parameters for a shape and its vertex markers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
    /// Outline width in screen points
    pub stroke_width: f32,
    /// Marker radius in canvas units
    pub marker_radius: f32,
    /// Radius of highlighted markers in canvas units
    pub highlighted_radius: f32,
    pub marker_fill: [f32; 4],
    pub highlighted_fill: [f32; 4],
    pub marker_outline: [f32; 4],
    pub marker_outline_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: colors::with_alpha(colors::SKY, 0.2),
            stroke: colors::SKY,
            stroke_width: 2.0,
            marker_radius: 4.0,
            highlighted_radius: 6.0,
            marker_fill: colors::SKY,
            highlighted_fill: colors::GREEN,
            marker_outline: colors::WHITE,
            marker_outline_width: 2.0,
        }
    }
}

/// Filled polygon outline in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOutline {
    pub points: Vec<Vec2>,
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
    pub stroke_width: f32,
}

/// One clickable vertex marker in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexMarker {
    pub index: usize,
    pub position: Vec2,
    pub radius: f32,
    pub fill: [f32; 4],
    pub outline: [f32; 4],
    pub outline_width: f32,
    pub highlighted: bool,
    /// Where to place the index label, pushed outward from the centroid
    pub label_position: Vec2,
}

/// Everything needed to paint the selected shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRenderData {
    pub outline: PolygonOutline,
    pub markers: Vec<VertexMarker>,
}

impl ShapeRenderData {
    /// Build the draw list for a shape. `highlighted` holds the vertex
    /// indices of this shape that should stand out.
    pub fn build(
        geometry: &ShapeGeometry,
        highlighted: &[usize],
        style: &RenderStyle,
        transform: &CanvasTransform,
    ) -> Self {
        let outline = PolygonOutline {
            points: geometry
                .points
                .iter()
                .map(|p| transform.to_screen(*p))
                .collect(),
            fill: style.fill,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
        };

        let centroid = geometry.centroid();
        let markers = geometry
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let is_highlighted = highlighted.contains(&index);
                let (radius, fill) = if is_highlighted {
                    (style.highlighted_radius, style.highlighted_fill)
                } else {
                    (style.marker_radius, style.marker_fill)
                };
                let outward = (*point - centroid).normalize_or_zero();
                VertexMarker {
                    index,
                    position: transform.to_screen(*point),
                    radius: transform.scale_length(radius),
                    fill,
                    outline: style.marker_outline,
                    outline_width: style.marker_outline_width,
                    highlighted: is_highlighted,
                    label_position: transform.to_screen(*point + outward * LABEL_OFFSET),
                }
            })
            .collect();

        Self { outline, markers }
    }

    pub fn highlighted_markers(&self) -> impl Iterator<Item = &VertexMarker> {
        self.markers.iter().filter(|m| m.highlighted)
    }
}
