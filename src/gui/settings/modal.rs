use std::path::PathBuf;

use eframe::egui;

use super::data::{
    SettingsData,
    MAX_ZOOM,
    MIN_ZOOM,
};
use crate::gui::modal::{
    Modal,
    ModalConfig,
    ModalResult,
};

#[derive(Clone, Default)]
pub struct PreferencesDraft {
    pub settings: SettingsData,
    pub original: SettingsData,
}

impl PreferencesDraft {
    pub fn is_dirty(&self) -> bool {
        self.settings != self.original
    }
}

pub struct PreferencesModal {
    modal: Modal<PreferencesDraft>,
}

impl PreferencesModal {
    pub fn new() -> Self {
        let config = ModalConfig {
            min_size: Some(egui::Vec2::new(420.0, 180.0)),
            resizable: false,
            ..Default::default()
        };

        Self {
            modal: Modal::new_with_data("Preferences", PreferencesDraft::default())
                .with_config(config),
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        let draft = self.modal.data_mut();
        draft.settings = current_settings.clone();
        draft.original = current_settings;
        self.modal.open();
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Returns the edited settings once the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        let result = self.modal.show(ctx, |ui, draft| {
            egui::Grid::new("preferences_grid").num_columns(2).spacing([12.0, 8.0]).show(
                ui,
                |ui| {
                    ui.label("Zoom");
                    ui.add(
                        egui::Slider::new(&mut draft.settings.zoom, MIN_ZOOM..=MAX_ZOOM)
                            .step_by(0.05),
                    );
                    ui.end_row();

                    ui.label("Extra font");
                    font_picker_ui(ui, &mut draft.settings.extra_font_path);
                    ui.end_row();
                },
            );

            ui.small("Add a font covering scripts the default fonts lack (CJK, Arabic, …).");
            ui.separator();

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(draft.is_dirty(), egui::Button::new("Save")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                if save_clicked {
                    Some(ModalResult::Confirmed(draft.clone()))
                } else if cancel_clicked {
                    Some(ModalResult::Cancelled)
                } else {
                    None
                }
            })
            .inner
        });

        match result {
            Some(ModalResult::Confirmed(draft)) => Some(draft.settings),
            _ => None,
        }
    }
}

impl Default for PreferencesModal {
    fn default() -> Self {
        Self::new()
    }
}

fn font_picker_ui(ui: &mut egui::Ui, font_path: &mut Option<PathBuf>) {
    ui.horizontal(|ui| {
        let label = font_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "None".to_string());
        ui.label(label).on_hover_text(
            font_path.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
        );

        if ui.button("Browse…").clicked() {
            if let Some(path) =
                rfd::FileDialog::new().add_filter("Fonts", &["ttf", "otf"]).pick_file()
            {
                *font_path = Some(path);
            }
        }

        if ui.add_enabled(font_path.is_some(), egui::Button::new("Clear")).clicked() {
            *font_path = None;
        }
    });
}
