//! Main application

mod menu;

use egui_dock::{DockArea, DockState, Style};

use crate::actions::{ActionContext, process_pending};
use crate::config::{SharedConfig, UiConfig, create_shared_config};
use crate::panels::{PanelTab, PanelViewer, Panels, default_dock_state};
use crate::state::{SharedAppState, create_shared_app_state};

use menu::{MenuAction, render_menu_bar};

/// Polygon Vertex Explorer application
pub struct VertexExplorerApp {
    app_state: SharedAppState,
    config: SharedConfig,
    dock_state: DockState<PanelTab>,
    panels: Panels,
    /// UI settings last pushed into the egui context
    applied_ui: Option<UiConfig>,
}

impl VertexExplorerApp {
    /// Create a new application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            app_state: create_shared_app_state(),
            config: create_shared_config(),
            dock_state: default_dock_state(),
            panels: Panels::default(),
            applied_ui: None,
        }
    }

    /// Push theme and font scale into egui when they change
    fn apply_ui_config(&mut self, ctx: &egui::Context) {
        let ui_config = self.config.read().config().ui.clone();
        if self.applied_ui.as_ref() == Some(&ui_config) {
            return;
        }

        ctx.set_visuals(ui_config.theme.visuals());
        ctx.set_zoom_factor(ui_config.font_scale);
        tracing::debug!("Applied UI config: {:?}", ui_config);
        self.applied_ui = Some(ui_config);
    }

    fn process_actions(&mut self, ctx: &egui::Context) {
        let action_ctx = ActionContext {
            app_state: &self.app_state,
            config: &self.config,
        };
        if process_pending(&action_ctx) > 0 {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for VertexExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_ui_config(ctx);

        if let Some(MenuAction::ResetLayout) = render_menu_bar(ctx, &self.app_state) {
            self.dock_state = default_dock_state();
        }

        let mut viewer = PanelViewer {
            panels: &mut self.panels,
            app_state: &self.app_state,
            config: &self.config,
        };
        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show_close_buttons(false)
            .show(ctx, &mut viewer);

        self.process_actions(ctx);
    }
}
