use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::core::{
    OptionMark,
    Phase,
    QuizEvent,
    QuizState,
};

const TITLE: &str = "Guess The Language";
const QUOTE_WIDTH_RATIO: f32 = 0.8;

/// Draws the quiz screen and returns the event the user triggered this frame, if any.
pub fn quiz_panel(ctx: &egui::Context, state: &QuizState, theme: &Theme) -> Option<QuizEvent> {
    let mut event = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        let layout =
            egui::Layout::top_down(egui::Align::Center).with_main_align(egui::Align::Center);

        ui.with_layout(layout, |ui| {
            ui.spacing_mut().item_spacing.y = 14.0;

            ui.label(theme.heading(ctx, TITLE).size(20.0).strong());

            let quote_width = ui.available_width() * QUOTE_WIDTH_RATIO;
            ui.allocate_ui(egui::vec2(quote_width, 0.0), |ui| {
                ui.add(
                    egui::Label::new(
                        RichText::new(state.displayed_text()).size(30.0).color(theme.content(ctx)),
                    )
                    .wrap(),
                );
            });

            ui.label(
                RichText::new(format!("Author: {}", state.quote().author))
                    .size(18.0)
                    .color(theme.content(ctx)),
            );

            if let Some(index) = option_buttons(ui, state, theme) {
                event = Some(QuizEvent::OptionPressed(index));
            }

            if state.phase() == Phase::Correct {
                centered_row(ui, "answer_actions", |ui| {
                    let toggle = format!("🔄 {}", state.toggle_label());
                    if ui.button(toggle).clicked() {
                        event = Some(QuizEvent::ToggleTranslation);
                    }
                    if ui.button("⏵ Next").clicked() {
                        event = Some(QuizEvent::NextQuote);
                    }
                });
            }

            if let Some(feedback) = state.feedback() {
                ui.label(RichText::new(feedback).small().color(theme.muted(ctx)));
            }
        });
    });

    event
}

fn option_buttons(ui: &mut egui::Ui, state: &QuizState, theme: &Theme) -> Option<usize> {
    centered_row(ui, "language_options", |ui| {
        let mut pressed = None;

        for (index, language) in state.options().iter().enumerate() {
            let (label, fill) = match state.option_mark(index) {
                OptionMark::Neutral => (language.to_string(), None),
                OptionMark::Success => (format!("✔ {}", language), Some(theme.success(ui.ctx()))),
                OptionMark::Destructive => {
                    (format!("✖ {}", language), Some(theme.destructive(ui.ctx())))
                }
            };

            let mut button = egui::Button::new(RichText::new(label).size(16.0))
                .min_size(egui::vec2(110.0, 34.0));
            if let Some(fill) = fill {
                button = button.fill(fill.gamma_multiply(0.35)).stroke(egui::Stroke::new(1.5, fill));
            }

            if ui.add(button).clicked() {
                pressed = Some(index);
            }
        }

        pressed
    })
}

/// Horizontal row centred using the width it took last frame.
fn centered_row<R>(
    ui: &mut egui::Ui,
    id_salt: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let id = ui.id().with(id_salt);
    let last_width: f32 = ui.ctx().data(|d| d.get_temp(id)).unwrap_or(0.0);
    let offset = ((ui.available_width() - last_width) / 2.0).max(0.0);

    ui.horizontal(|ui| {
        ui.add_space(offset);
        let start = ui.cursor().min.x;
        let inner = add_contents(ui);
        let width = ui.min_rect().max.x - start;

        if (width - last_width).abs() > 0.5 {
            ui.ctx().data_mut(|d| d.insert_temp(id, width));
            ui.ctx().request_repaint();
        }
        inner
    })
    .inner
}
