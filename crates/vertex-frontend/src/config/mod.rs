//! Application configuration module
//!
//! UI preferences for the explorer. Learning progress is never stored here.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use serde::{Deserialize, Serialize};
use vertex_renderer::DEFAULT_PICK_RADIUS;

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Light,
    Dark,
}

impl UiTheme {
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            UiTheme::Light => egui::Visuals::light(),
            UiTheme::Dark => egui::Visuals::dark(),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// UI theme
    pub theme: UiTheme,
    /// Font size multiplier
    pub font_scale: f32,
}

impl UiConfig {
    pub const MIN_FONT_SCALE: f32 = 0.75;
    pub const MAX_FONT_SCALE: f32 = 2.0;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Light,
            font_scale: 1.0,
        }
    }
}

/// Shape canvas preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanvasConfig {
    /// Draw the vertex number next to each marker
    pub show_vertex_labels: bool,
    /// Click tolerance around a vertex, in canvas units
    pub pick_radius: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            show_vertex_labels: false,
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Canvas settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
