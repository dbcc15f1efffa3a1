use std::path::PathBuf;

use eframe::egui::{
    self,
    containers,
};

use crate::core::CorpusSource;

pub enum TopBarAction {
    LoadCorpus(CorpusSource),
    OpenPreferences,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, corpus_source: &CorpusSource) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Open Quote Corpus…").clicked() {
                        if let Some(path) = pick_corpus_file() {
                            action = Some(TopBarAction::LoadCorpus(CorpusSource::File(path)));
                        }
                    }
                    let using_builtin = *corpus_source == CorpusSource::Embedded;
                    if ui.add_enabled(!using_builtin, egui::Button::new("Use Built-in Corpus")).clicked()
                    {
                        action = Some(TopBarAction::LoadCorpus(CorpusSource::Embedded));
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Preferences…").clicked() {
                        action = Some(TopBarAction::OpenPreferences);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(corpus_source.describe()).on_hover_text("Current quote corpus");
                });
            });
        });

        action
    }
}

fn pick_corpus_file() -> Option<PathBuf> {
    rfd::FileDialog::new().set_title("Open Quote Corpus").add_filter("JSON", &["json"]).pick_file()
}
