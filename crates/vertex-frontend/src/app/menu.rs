//! Menu bar rendering

use crate::state::{AppAction, SharedAppState};

/// Menu actions handled by the app itself rather than the action queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ResetLayout,
}

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(ctx: &egui::Context, app_state: &SharedAppState) -> Option<MenuAction> {
    let mut menu_action = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Session", |ui| {
                if ui.button("Start Over").clicked() {
                    let mut state = app_state.lock();
                    let shape = state.session.selected_shape();
                    state.queue_action(AppAction::SelectShape(shape));
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Layout").clicked() {
                    menu_action = Some(MenuAction::ResetLayout);
                    ui.close_menu();
                }
            });
        });
    });

    menu_action
}
