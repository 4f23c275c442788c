//! Settings panel

use crate::config::{SharedConfig, UiConfig, UiTheme};
use crate::panels::Panel;
use crate::state::{AppAction, ConfigChange, SharedAppState};

/// Settings panel for UI preferences
#[derive(Default)]
pub struct SettingsPanel {
    /// Font scale while the slider is being dragged
    dragging_font_scale: Option<f32>,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Panel for SettingsPanel {
    fn name(&self) -> &str {
        "Settings"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, config: &SharedConfig) {
        let (current, path) = {
            let manager = config.read();
            (manager.config().clone(), manager.config_file_path().to_path_buf())
        };
        let mut changes = Vec::new();

        ui.horizontal(|ui| {
            ui.label("Theme:");
            let mut theme = current.ui.theme;
            ui.radio_value(&mut theme, UiTheme::Light, "Light");
            ui.radio_value(&mut theme, UiTheme::Dark, "Dark");
            if theme != current.ui.theme {
                changes.push(ConfigChange::SetTheme(theme));
            }
        });

        let mut scale = self.dragging_font_scale.unwrap_or(current.ui.font_scale);
        let response = ui.add(
            egui::Slider::new(&mut scale, UiConfig::MIN_FONT_SCALE..=UiConfig::MAX_FONT_SCALE)
                .text("Font scale"),
        );
        if response.dragged() {
            self.dragging_font_scale = Some(scale);
        } else if response.drag_stopped() || response.changed() {
            self.dragging_font_scale = None;
            changes.push(ConfigChange::SetFontScale(scale));
        }

        let mut show_labels = current.canvas.show_vertex_labels;
        if ui.checkbox(&mut show_labels, "Show vertex numbers").changed() {
            changes.push(ConfigChange::SetShowVertexLabels(show_labels));
        }

        ui.separator();
        if ui.button("Reset to defaults").clicked() {
            changes.push(ConfigChange::ResetToDefaults);
        }
        ui.weak(format!("Config file: {}", path.display()));

        if !changes.is_empty() {
            let mut state = app_state.lock();
            for change in changes {
                state.queue_action(AppAction::UpdateConfig(change));
            }
        }
    }
}
