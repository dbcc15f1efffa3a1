use eframe::egui;

use crate::core::LinguessError;

#[derive(Default, Clone)]
struct ErrorData {
    title: String,
    message: String,
    details: Option<String>,
}

#[derive(Default)]
pub struct ErrorModal {
    open: bool,
    data: ErrorData,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        error: &LinguessError,
    ) {
        let title = title.into();
        tracing::error!("{}: {}", title, error);
        self.data = ErrorData { title, message: message.into(), details: Some(error.to_string()) };
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(ui.visuals().error_fg_color));
                ui.label(egui::RichText::new(&self.data.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(&self.data.message);

            if let Some(details) = &self.data.details {
                ui.add_space(10.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(3)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.data = ErrorData::default();
        }
    }
}
