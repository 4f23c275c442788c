//! Quiz panel - the vertex count question

use vertex_core::AnswerFeedback;
use vertex_renderer::colors;

use crate::config::SharedConfig;
use crate::paint::to_color32;
use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

/// Quiz panel asking how many vertices the selected shape has
pub struct QuizPanel;

impl QuizPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuizPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for QuizPanel {
    fn name(&self) -> &str {
        "Quiz"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, _config: &SharedConfig) {
        let mut state = app_state.lock();
        let info = state.session.selected_info();
        let feedback = state.session.feedback();

        ui.heading("Question");
        ui.separator();

        if feedback == AnswerFeedback::Correct {
            ui.colored_label(
                to_color32(colors::GREEN),
                egui::RichText::new(format!(
                    "{} have {} vertices!",
                    info.plural_name, info.vertex_count
                ))
                .strong(),
            );
            ui.add_space(8.0);
            if ui.button("Try again").clicked() {
                state.queue_action(AppAction::ResetAnswer);
            }
            return;
        }

        ui.label(format!("How many vertices do {} have?", info.plural_name));

        let mut text = state.session.answer_text().to_string();
        let mut submit = false;

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .desired_width(80.0)
                    .hint_text("?"),
            );

            if feedback == AnswerFeedback::Wrong {
                ui.painter().rect_stroke(
                    response.rect.expand(2.0),
                    4.0,
                    egui::Stroke::new(1.5, to_color32(colors::ERROR)),
                );
            }

            if response.changed() {
                state.queue_action(AppAction::UpdateAnswer(text.clone()));
            }

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Check").clicked() || enter_pressed {
                submit = true;
            }
        });

        if submit {
            state.queue_action(AppAction::SubmitAnswer);
        }

        if feedback == AnswerFeedback::Wrong {
            ui.colored_label(
                to_color32(colors::ERROR),
                "Not quite. Count the corners and try again.",
            );
        }
    }
}
