use vertex_core::{AnswerFeedback, InteractionState, ShapeId, VertexKey, lookup_geometry};

#[test]
fn pentagon_then_hexagon_session() {
    let mut state = InteractionState::new();

    state.select_shape(ShapeId::Pentagon);
    state.toggle_vertex_highlight(ShapeId::Pentagon, 0).unwrap();
    state.toggle_vertex_highlight(ShapeId::Pentagon, 2).unwrap();

    let expected: Vec<VertexKey> = vec![
        VertexKey::new(ShapeId::Pentagon, 0),
        VertexKey::new(ShapeId::Pentagon, 2),
    ];
    assert_eq!(
        state.highlighted_vertices().iter().copied().collect::<Vec<_>>(),
        expected
    );

    state.update_answer_text("5");
    assert_eq!(state.submit_answer(), AnswerFeedback::Correct);

    state.select_shape(ShapeId::Hexagon);
    assert!(state.highlighted_vertices().is_empty());
    assert_eq!(state.feedback(), AnswerFeedback::Neutral);
}

#[test]
fn every_vertex_of_every_shape_can_be_highlighted() {
    let mut state = InteractionState::new();
    for shape in ShapeId::all() {
        state.select_shape(*shape);
        for index in 0..lookup_geometry(*shape).len() {
            assert_eq!(state.toggle_vertex_highlight(*shape, index), Ok(true));
        }
        assert_eq!(state.highlighted_count(), shape.vertex_count());
        assert!(state.toggle_vertex_highlight(*shape, shape.vertex_count()).is_err());
    }
}

#[test]
fn loose_answers_count_as_numbers() {
    let mut state = InteractionState::new();
    state.select_shape(ShapeId::Square);
    state.update_answer_text("4 corners");
    assert_eq!(state.submit_answer(), AnswerFeedback::Correct);
}
