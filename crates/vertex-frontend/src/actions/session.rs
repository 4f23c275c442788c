//! Session action handling

use tracing::{info, warn};

use crate::state::AppAction;

use super::ActionContext;

/// Apply an action to the interaction state
pub fn handle_session_action(action: AppAction, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    let session_id = state.session_id;
    let session = &mut state.session;

    match action {
        AppAction::SelectShape(shape) => {
            session.select_shape(shape);
        }

        AppAction::VertexClicked(index) => {
            let shape = session.selected_shape();
            if let Err(e) = session.toggle_vertex_highlight(shape, index) {
                warn!("Ignoring vertex click in session {}: {}", session_id, e);
            }
        }

        AppAction::UpdateAnswer(text) => {
            session.update_answer_text(text);
        }

        AppAction::SubmitAnswer => {
            let feedback = session.submit_answer();
            info!("Session {} answer checked: {:?}", session_id, feedback);
        }

        AppAction::ResetAnswer => {
            session.reset_answer();
        }

        AppAction::UpdateConfig(_) => {
            warn!("Settings action routed to session handler");
        }
    }
}
