//! Action handling
//!
//! Panels queue [`AppAction`]s while drawing; the app drains the queue once
//! per frame and applies each action here.

mod session;
mod settings;

pub use session::handle_session_action;
pub use settings::handle_settings_action;

use crate::config::SharedConfig;
use crate::state::{AppAction, SharedAppState};

/// Handles needed to apply actions
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub config: &'a SharedConfig,
}

/// Apply a single action
pub fn dispatch(action: AppAction, ctx: &ActionContext) {
    tracing::trace!("Dispatching action: {}", action.description());
    match action {
        AppAction::UpdateConfig(change) => handle_settings_action(change, ctx),
        other => handle_session_action(other, ctx),
    }
}

/// Drain and apply every queued action. Returns how many were applied.
pub fn process_pending(ctx: &ActionContext) -> usize {
    let actions = ctx.app_state.lock().take_pending_actions();
    let count = actions.len();
    for action in actions {
        dispatch(action, ctx);
    }
    count
}
