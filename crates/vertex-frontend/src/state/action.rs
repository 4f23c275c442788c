//! Actions queued by the UI

use vertex_core::ShapeId;

use crate::config::UiTheme;

/// A user interaction to apply to the application state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Switch shape, discarding highlights and the answer
    SelectShape(ShapeId),
    /// A vertex marker of the selected shape was clicked
    VertexClicked(usize),
    /// The answer field changed
    UpdateAnswer(String),
    /// The Check button was pressed
    SubmitAnswer,
    /// Clear the answer but keep highlights
    ResetAnswer,
    /// Change a preference
    UpdateConfig(ConfigChange),
}

/// A change to the persisted preferences
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigChange {
    SetTheme(UiTheme),
    SetFontScale(f32),
    SetShowVertexLabels(bool),
    ResetToDefaults,
}

impl AppAction {
    /// Short description for logs
    pub fn description(&self) -> &'static str {
        match self {
            AppAction::SelectShape(_) => "Select Shape",
            AppAction::VertexClicked(_) => "Highlight Vertex",
            AppAction::UpdateAnswer(_) => "Edit Answer",
            AppAction::SubmitAnswer => "Check Answer",
            AppAction::ResetAnswer => "Try Again",
            AppAction::UpdateConfig(_) => "Update Settings",
        }
    }
}
