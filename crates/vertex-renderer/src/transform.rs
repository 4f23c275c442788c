//! Canvas to screen mapping

use glam::Vec2;

use vertex_core::CANVAS_SIZE;

/// Uniform scale + offset from catalog canvas units to screen points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen position of the canvas origin
    pub origin: Vec2,
    /// Screen points per canvas unit
    pub scale: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CanvasTransform {
    /// Fit the square canvas into a screen rectangle, centered
    pub fn fit(rect_min: Vec2, rect_size: Vec2) -> Self {
        let side = rect_size.min_element().max(0.0);
        let scale = (side / CANVAS_SIZE).max(f32::EPSILON);
        let used = Vec2::splat(CANVAS_SIZE * scale);
        Self {
            origin: rect_min + (rect_size - used) * 0.5,
            scale,
        }
    }

    pub fn to_screen(&self, canvas: Vec2) -> Vec2 {
        self.origin + canvas * self.scale
    }

    pub fn to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.origin) / self.scale
    }

    /// Convert a length in canvas units to screen points
    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_wide_rect() {
        let t = CanvasTransform::fit(Vec2::new(10.0, 20.0), Vec2::new(1000.0, 200.0));
        assert_relative_eq!(t.scale, 0.5);
        // 200pt of the 1000pt width is used, centered
        assert_relative_eq!(t.origin.x, 410.0);
        assert_relative_eq!(t.origin.y, 20.0);
    }

    #[test]
    fn test_round_trip() {
        let t = CanvasTransform::fit(Vec2::new(5.0, 5.0), Vec2::new(300.0, 600.0));
        let p = Vec2::new(120.0, 250.0);
        let back = t.to_canvas(t.to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_rect_does_not_divide_by_zero() {
        let t = CanvasTransform::fit(Vec2::ZERO, Vec2::ZERO);
        assert!(t.scale > 0.0);
        assert!(t.to_canvas(Vec2::ONE).is_finite());
    }
}
