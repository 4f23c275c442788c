//! Interaction state for one explorer session

use std::collections::BTreeSet;

use crate::{
    AnswerFeedback, ShapeGeometry, ShapeId, ShapeInfo, VertexError, answer_matches,
    lookup_geometry, lookup_info,
};

/// A vertex of a specific shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    pub shape: ShapeId,
    pub index: usize,
}

impl VertexKey {
    pub fn new(shape: ShapeId, index: usize) -> Self {
        Self { shape, index }
    }
}

/// Selection, highlights and answer state of a session
///
/// `is_correct` and `has_error` are never both set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    selected_shape: ShapeId,
    highlighted_vertices: BTreeSet<VertexKey>,
    answer_text: String,
    is_correct: bool,
    has_error: bool,
}

impl InteractionState {
    /// Create a neutral state with the default shape selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_shape(&self) -> ShapeId {
        self.selected_shape
    }

    pub fn selected_info(&self) -> &'static ShapeInfo {
        lookup_info(self.selected_shape)
    }

    pub fn selected_geometry(&self) -> &'static ShapeGeometry {
        lookup_geometry(self.selected_shape)
    }

    pub fn highlighted_vertices(&self) -> &BTreeSet<VertexKey> {
        &self.highlighted_vertices
    }

    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn feedback(&self) -> AnswerFeedback {
        AnswerFeedback::from_flags(self.is_correct, self.has_error)
    }

    /// Switch to another shape, discarding highlights and the answer
    pub fn select_shape(&mut self, id: ShapeId) {
        self.selected_shape = id;
        self.highlighted_vertices.clear();
        self.reset_answer();
        tracing::info!("Selected shape: {}", id);
    }

    /// Highlight a vertex. Highlights only accumulate; clicking a
    /// highlighted vertex again leaves it highlighted.
    ///
    /// Returns whether the vertex was newly highlighted.
    pub fn toggle_vertex_highlight(
        &mut self,
        shape: ShapeId,
        index: usize,
    ) -> Result<bool, VertexError> {
        let vertex_count = shape.vertex_count();
        if index >= vertex_count {
            return Err(VertexError::VertexIndexOutOfRange {
                shape,
                index,
                vertex_count,
            });
        }

        let inserted = self.highlighted_vertices.insert(VertexKey::new(shape, index));
        if inserted {
            tracing::debug!("Highlighted vertex {} of {}", index, shape);
        }
        Ok(inserted)
    }

    /// Store the raw answer text without validating it
    pub fn update_answer_text(&mut self, text: impl Into<String>) {
        self.answer_text = text.into();
    }

    /// Check the current answer against the selected shape's vertex count.
    ///
    /// Once the answer is correct, submission stays closed until
    /// [`reset_answer`](Self::reset_answer) or a shape change.
    pub fn submit_answer(&mut self) -> AnswerFeedback {
        if self.is_correct {
            return AnswerFeedback::Correct;
        }

        let expected = self.selected_info().vertex_count;
        if answer_matches(&self.answer_text, expected) {
            self.is_correct = true;
            self.has_error = false;
            tracing::info!("Correct answer for {}: {}", self.selected_shape, expected);
        } else {
            self.has_error = true;
            tracing::debug!(
                "Wrong answer for {}: {:?}",
                self.selected_shape,
                self.answer_text
            );
        }
        self.feedback()
    }

    /// Clear the answer and feedback, keeping highlights
    pub fn reset_answer(&mut self) {
        self.answer_text.clear();
        self.is_correct = false;
        self.has_error = false;
    }

    pub fn is_highlighted(&self, shape: ShapeId, index: usize) -> bool {
        self.highlighted_vertices
            .contains(&VertexKey::new(shape, index))
    }

    /// Highlighted vertex indices of one shape, ascending
    pub fn highlighted_for(&self, shape: ShapeId) -> impl Iterator<Item = usize> + '_ {
        self.highlighted_vertices
            .iter()
            .filter(move |key| key.shape == shape)
            .map(|key| key.index)
    }

    pub fn highlighted_count(&self) -> usize {
        self.highlighted_vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(shape: ShapeId) -> InteractionState {
        let mut state = InteractionState::new();
        state.select_shape(shape);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = InteractionState::new();
        assert_eq!(state.selected_shape(), ShapeId::Triangle);
        assert!(state.highlighted_vertices().is_empty());
        assert_eq!(state.answer_text(), "");
        assert_eq!(state.feedback(), AnswerFeedback::Neutral);
    }

    #[test]
    fn test_select_shape_resets_everything() {
        let mut state = state_with(ShapeId::Square);
        state.toggle_vertex_highlight(ShapeId::Square, 1).unwrap();
        state.update_answer_text("4");
        state.submit_answer();
        assert!(state.is_correct());

        state.select_shape(ShapeId::Square);
        assert!(state.highlighted_vertices().is_empty());
        assert_eq!(state.answer_text(), "");
        assert!(!state.is_correct());
        assert!(!state.has_error());
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let mut state = state_with(ShapeId::Hexagon);
        assert_eq!(state.toggle_vertex_highlight(ShapeId::Hexagon, 4), Ok(true));
        let once = state.highlighted_vertices().clone();
        assert_eq!(state.toggle_vertex_highlight(ShapeId::Hexagon, 4), Ok(false));
        assert_eq!(state.highlighted_vertices(), &once);
        assert!(state.is_highlighted(ShapeId::Hexagon, 4));
    }

    #[test]
    fn test_highlight_out_of_range() {
        let mut state = state_with(ShapeId::Triangle);
        let err = state.toggle_vertex_highlight(ShapeId::Triangle, 3).unwrap_err();
        assert_eq!(
            err,
            VertexError::VertexIndexOutOfRange {
                shape: ShapeId::Triangle,
                index: 3,
                vertex_count: 3,
            }
        );
        assert_eq!(state.highlighted_count(), 0);
    }

    #[test]
    fn test_correct_answer() {
        let mut state = state_with(ShapeId::Triangle);
        state.update_answer_text("3");
        assert_eq!(state.submit_answer(), AnswerFeedback::Correct);
        assert!(state.is_correct());
        assert!(!state.has_error());
    }

    #[test]
    fn test_wrong_answer() {
        let mut state = state_with(ShapeId::Triangle);
        state.update_answer_text("4");
        assert_eq!(state.submit_answer(), AnswerFeedback::Wrong);
        assert!(!state.is_correct());
        assert!(state.has_error());
    }

    #[test]
    fn test_non_numeric_answer_is_wrong() {
        for shape in ShapeId::all() {
            let mut state = state_with(*shape);
            state.update_answer_text("abc");
            state.submit_answer();
            assert!(state.has_error());
            assert!(!state.is_correct());
        }
    }

    #[test]
    fn test_resubmit_after_wrong_answer() {
        let mut state = state_with(ShapeId::Square);
        state.update_answer_text("");
        state.submit_answer();
        assert!(state.has_error());

        state.update_answer_text("4");
        state.submit_answer();
        assert!(state.is_correct());
        assert!(!state.has_error());
    }

    #[test]
    fn test_submit_after_correct_is_closed() {
        let mut state = state_with(ShapeId::Triangle);
        state.update_answer_text("3");
        state.submit_answer();

        state.update_answer_text("4");
        assert_eq!(state.submit_answer(), AnswerFeedback::Correct);
        assert!(state.is_correct());
        assert!(!state.has_error());
        assert!(!(state.is_correct() && state.has_error()));

        state.reset_answer();
        state.update_answer_text("4");
        assert_eq!(state.submit_answer(), AnswerFeedback::Wrong);
        assert!(!(state.is_correct() && state.has_error()));
    }

    #[test]
    fn test_reset_answer_keeps_highlights() {
        let mut state = state_with(ShapeId::Pentagon);
        state.toggle_vertex_highlight(ShapeId::Pentagon, 1).unwrap();
        state.update_answer_text("5");
        state.submit_answer();

        state.reset_answer();
        assert_eq!(state.answer_text(), "");
        assert_eq!(state.feedback(), AnswerFeedback::Neutral);
        assert!(state.is_highlighted(ShapeId::Pentagon, 1));
    }

    #[test]
    fn test_highlighted_for_filters_by_shape() {
        let mut state = state_with(ShapeId::Hexagon);
        state.toggle_vertex_highlight(ShapeId::Hexagon, 5).unwrap();
        state.toggle_vertex_highlight(ShapeId::Hexagon, 0).unwrap();
        state.toggle_vertex_highlight(ShapeId::Triangle, 2).unwrap();

        let hexagon: Vec<usize> = state.highlighted_for(ShapeId::Hexagon).collect();
        assert_eq!(hexagon, vec![0, 5]);
        assert_eq!(state.highlighted_count(), 3);
    }
}
