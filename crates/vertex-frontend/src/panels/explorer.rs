//! Explorer panel - shape selector and clickable canvas

use vertex_core::{CANVAS_SIZE, ShapeId, lookup_geometry};
use vertex_renderer::{CanvasTransform, RenderStyle, ShapeRenderData, colors, pick_vertex};

use crate::config::SharedConfig;
use crate::paint::{paint_shape, to_color32, to_vec2};
use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

/// Smallest canvas side in points
const MIN_CANVAS_SIDE: f32 = 160.0;

/// Explorer panel showing the selected shape
pub struct ExplorerPanel {
    style: RenderStyle,
}

impl ExplorerPanel {
    pub fn new() -> Self {
        Self {
            style: RenderStyle::default(),
        }
    }

    fn shape_selector(&self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let selected = app_state.lock().session.selected_shape();

        ui.horizontal_wrapped(|ui| {
            for shape in ShapeId::all() {
                if ui
                    .selectable_label(selected == *shape, shape.info().name)
                    .clicked()
                {
                    app_state.lock().queue_action(AppAction::SelectShape(*shape));
                }
            }
        });
    }

    fn canvas(&self, ui: &mut egui::Ui, app_state: &SharedAppState, config: &SharedConfig) {
        let (show_labels, pick_radius) = {
            let manager = config.read();
            let canvas = &manager.config().canvas;
            (canvas.show_vertex_labels, canvas.pick_radius)
        };

        let (shape, highlighted) = {
            let state = app_state.lock();
            let shape = state.session.selected_shape();
            let highlighted: Vec<usize> = state.session.highlighted_for(shape).collect();
            (shape, highlighted)
        };
        let geometry = lookup_geometry(shape);

        let side = ui
            .available_width()
            .min(ui.available_height() - 32.0)
            .clamp(MIN_CANVAS_SIDE, CANVAS_SIZE * 1.5);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::click());
        let rect = response.rect;
        let transform = CanvasTransform::fit(to_vec2(rect.min), to_vec2(rect.max) - to_vec2(rect.min));

        painter.rect_filled(rect, 8.0, to_color32(colors::CANVAS_BACKGROUND));
        let data = ShapeRenderData::build(geometry, &highlighted, &self.style, &transform);
        paint_shape(&painter, &data, show_labels);

        let vertex_at = |pos: egui::Pos2| {
            pick_vertex(geometry, transform.to_canvas(to_vec2(pos)), pick_radius)
        };

        if response.hover_pos().and_then(vertex_at).is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if response.clicked()
            && let Some(index) = response.interact_pointer_pos().and_then(vertex_at)
        {
            app_state.lock().queue_action(AppAction::VertexClicked(index));
        }
    }
}

impl Default for ExplorerPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ExplorerPanel {
    fn name(&self) -> &str {
        "Explorer"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, config: &SharedConfig) {
        ui.heading(
            egui::RichText::new("Polygon Vertex Explorer")
                .size(26.0)
                .strong(),
        );
        ui.label("Learn about vertices in polygons!");
        ui.separator();

        self.shape_selector(ui, app_state);
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            self.canvas(ui, app_state, config);
            ui.add_space(4.0);
            ui.weak("Click on the vertices to highlight them");
        });
    }
}
