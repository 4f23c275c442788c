//! Painting renderer draw lists with egui

use egui::{Color32, Pos2, Stroke};
use glam::Vec2;
use vertex_renderer::{ShapeRenderData, colors};

pub fn to_color32(color: [f32; 4]) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

pub fn to_pos2(v: Vec2) -> Pos2 {
    egui::pos2(v.x, v.y)
}

pub fn to_vec2(p: Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Paint the polygon, its markers and optionally 1-based vertex labels
pub fn paint_shape(painter: &egui::Painter, data: &ShapeRenderData, show_labels: bool) {
    let outline = &data.outline;
    painter.add(egui::Shape::convex_polygon(
        outline.points.iter().copied().map(to_pos2).collect(),
        to_color32(outline.fill),
        Stroke::new(outline.stroke_width, to_color32(outline.stroke)),
    ));

    for marker in &data.markers {
        painter.circle(
            to_pos2(marker.position),
            marker.radius,
            to_color32(marker.fill),
            Stroke::new(marker.outline_width, to_color32(marker.outline)),
        );

        if show_labels {
            painter.text(
                to_pos2(marker.label_position),
                egui::Align2::CENTER_CENTER,
                (marker.index + 1).to_string(),
                egui::FontId::proportional(14.0),
                to_color32(colors::LABEL),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32(colors::WHITE), Color32::WHITE);
        assert_eq!(to_color32(colors::SKY), Color32::from_rgb(14, 165, 233));
        assert_eq!(to_color32(colors::GREEN), Color32::from_rgb(34, 197, 94));
    }

    #[test]
    fn test_point_conversion() {
        let v = Vec2::new(12.5, -3.0);
        assert_eq!(to_vec2(to_pos2(v)), v);
    }
}
