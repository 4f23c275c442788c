//! Dockable panels

mod explorer;
mod learn;
mod quiz;
mod settings;

pub use explorer::ExplorerPanel;
pub use learn::LearnPanel;
pub use quiz::QuizPanel;
pub use settings::SettingsPanel;

use egui_dock::{DockState, NodeIndex, TabViewer};

use crate::config::SharedConfig;
use crate::state::SharedAppState;

/// A panel that can be shown in a dock tab
pub trait Panel {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, config: &SharedConfig);
}

/// Dock tab identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTab {
    Explorer,
    Quiz,
    Learn,
    Settings,
}

/// Default layout: explorer on the left, quiz and explainer stacked right
pub fn default_dock_state() -> DockState<PanelTab> {
    let mut dock_state = DockState::new(vec![PanelTab::Explorer]);
    let surface = dock_state.main_surface_mut();
    let [_explorer, right] = surface.split_right(NodeIndex::root(), 0.62, vec![PanelTab::Quiz]);
    surface.split_below(right, 0.35, vec![PanelTab::Learn, PanelTab::Settings]);
    dock_state
}

/// All panel instances
#[derive(Default)]
pub struct Panels {
    pub explorer: ExplorerPanel,
    pub quiz: QuizPanel,
    pub learn: LearnPanel,
    pub settings: SettingsPanel,
}

impl Panels {
    pub fn get_mut(&mut self, tab: PanelTab) -> &mut dyn Panel {
        match tab {
            PanelTab::Explorer => &mut self.explorer,
            PanelTab::Quiz => &mut self.quiz,
            PanelTab::Learn => &mut self.learn,
            PanelTab::Settings => &mut self.settings,
        }
    }
}

/// Bridges the dock area to the panels
pub struct PanelViewer<'a> {
    pub panels: &'a mut Panels,
    pub app_state: &'a SharedAppState,
    pub config: &'a SharedConfig,
}

impl TabViewer for PanelViewer<'_> {
    type Tab = PanelTab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        self.panels.get_mut(*tab).name().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        self.panels.get_mut(*tab).ui(ui, self.app_state, self.config);
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }
}
