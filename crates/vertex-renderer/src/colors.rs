//! Colors for shape rendering (RGBA, 0..1, unmultiplied)

pub const SKY: [f32; 4] = [14.0 / 255.0, 165.0 / 255.0, 233.0 / 255.0, 1.0]; // #0ea5e9
pub const GREEN: [f32; 4] = [34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0, 1.0]; // #22c55e
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const LABEL: [f32; 4] = [7.0 / 255.0, 89.0 / 255.0, 133.0 / 255.0, 1.0]; // #075985
pub const ERROR: [f32; 4] = [239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0]; // #ef4444
pub const CANVAS_BACKGROUND: [f32; 4] = [240.0 / 255.0, 249.0 / 255.0, 1.0, 1.0]; // sky-50

/// Same color with a different alpha
pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}
