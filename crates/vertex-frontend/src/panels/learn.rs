//! Learn panel - explainer and highlighted vertex summary

use crate::config::SharedConfig;
use crate::panels::Panel;
use crate::state::SharedAppState;

const VERTEX_EXPLAINER: &str = "A vertex is a point where two sides of a polygon meet. \
You can think of it as a corner of the shape. For example, a triangle has three \
vertices where its sides meet.";

/// Learn panel
pub struct LearnPanel;

impl LearnPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LearnPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for LearnPanel {
    fn name(&self) -> &str {
        "Learn"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, _config: &SharedConfig) {
        ui.heading("What is a Vertex?");
        ui.label(VERTEX_EXPLAINER);
        ui.separator();

        let state = app_state.lock();
        let shape = state.session.selected_shape();
        let highlighted: Vec<usize> = state.session.highlighted_for(shape).collect();

        ui.label(format!(
            "Highlighted: {} of {}",
            highlighted.len(),
            shape.vertex_count()
        ));

        if highlighted.is_empty() {
            ui.weak("No vertices highlighted yet.");
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for index in highlighted {
                ui.label(format!("• Vertex {}", index + 1));
            }
        });
    }
}
