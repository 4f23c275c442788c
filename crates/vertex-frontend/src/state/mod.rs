//! Application state

mod action;

pub use action::{AppAction, ConfigChange};

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;
use vertex_core::InteractionState;

/// State owned by the running explorer session
pub struct AppState {
    /// Selection, highlights and answer of the current session
    pub session: InteractionState,
    /// Identifies the session in log output
    pub session_id: Uuid,
    /// Actions queued by panels, applied once per frame
    pending_actions: Vec<AppAction>,
}

impl AppState {
    /// Start a fresh session
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!("Started session {}", session_id);
        Self {
            session: InteractionState::new(),
            session_id,
            pending_actions: Vec::new(),
        }
    }

    /// Queue an action to be applied after the current frame
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Drain the queued actions in submission order
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared application state
pub fn create_shared_app_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertex_core::ShapeId;

    #[test]
    fn test_actions_drain_in_order() {
        let mut state = AppState::new();
        state.queue_action(AppAction::SelectShape(ShapeId::Square));
        state.queue_action(AppAction::VertexClicked(1));
        assert!(state.has_pending_actions());

        let actions = state.take_pending_actions();
        assert_eq!(
            actions,
            vec![
                AppAction::SelectShape(ShapeId::Square),
                AppAction::VertexClicked(1)
            ]
        );
        assert!(!state.has_pending_actions());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(AppState::new().session_id, AppState::new().session_id);
    }
}
