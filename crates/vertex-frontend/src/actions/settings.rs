//! Settings action handling

use crate::config::UiConfig;
use crate::state::ConfigChange;

use super::ActionContext;

/// Apply a preference change and persist it
pub fn handle_settings_action(change: ConfigChange, ctx: &ActionContext) {
    let mut manager = ctx.config.write();

    match change {
        ConfigChange::SetTheme(theme) => {
            manager.config_mut().ui.theme = theme;
        }
        ConfigChange::SetFontScale(scale) => {
            manager.config_mut().ui.font_scale =
                scale.clamp(UiConfig::MIN_FONT_SCALE, UiConfig::MAX_FONT_SCALE);
        }
        ConfigChange::SetShowVertexLabels(show) => {
            manager.config_mut().canvas.show_vertex_labels = show;
        }
        ConfigChange::ResetToDefaults => {
            manager.reset_to_defaults();
        }
    }

    if let Err(e) = manager.save() {
        tracing::warn!("Failed to save config: {}", e);
    }
}
