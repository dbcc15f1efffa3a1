mod modals;

use eframe::egui;
use modals::Modals;

use super::{
    fonts::install_fonts,
    quiz_panel::quiz_panel,
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        Corpus,
        CorpusSource,
        LinguessError,
        QuizSession,
    },
    persistence::save_json,
};

/// The session to start with. A configured corpus that fails to load falls back
/// to the built-in one, and the failure is handed back for display.
pub fn initial_session(
    settings: &SettingsData,
) -> Result<(QuizSession, CorpusSource, Option<LinguessError>), LinguessError> {
    let requested = CorpusSource::from_setting(settings.corpus_path.as_deref());

    let (corpus, source, failure) = match Corpus::load(&requested) {
        Ok(corpus) => (corpus, requested, None),
        Err(e) if requested != CorpusSource::Embedded => {
            tracing::warn!("Falling back to the built-in corpus: {}", e);
            (Corpus::load(&CorpusSource::Embedded)?, CorpusSource::Embedded, Some(e))
        }
        Err(e) => return Err(e),
    };

    Ok((QuizSession::from_corpus(corpus)?, source, failure))
}

pub struct LinguessApp {
    session: QuizSession,
    corpus_source: CorpusSource,

    // Configuration
    settings_data: SettingsData,

    // UI State
    theme: Theme,
    modals: Modals,
}

impl LinguessApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
    ) -> Result<Self, LinguessError> {
        let (session, corpus_source, corpus_failure) = initial_session(&settings_data)?;

        let mut app = Self {
            session,
            corpus_source,
            settings_data,
            theme: Theme::dracula(),
            modals: Modals::default(),
        };

        if let Some(e) = corpus_failure {
            app.modals.error.show_error(
                "Corpus Error",
                "The configured quote corpus could not be loaded. Using the built-in corpus.",
                &e,
            );
        }

        app.setup_fonts(&cc.egui_ctx);
        app.setup_theme(&cc.egui_ctx);
        Ok(app)
    }

    fn setup_fonts(&mut self, ctx: &egui::Context) {
        if let Err(e) = install_fonts(ctx, self.settings_data.extra_font_path.as_deref()) {
            self.modals.error.show_error(
                "Font Error",
                "The extra font could not be loaded. Using the default fonts.",
                &e,
            );
        }
    }

    fn setup_theme(&self, ctx: &egui::Context) {
        set_theme(ctx, &self.theme);
        ctx.set_zoom_factor(self.settings_data.clamped_zoom());

        let preference = if self.settings_data.dark_mode {
            egui::ThemePreference::Dark
        } else {
            egui::ThemePreference::Light
        };
        ctx.options_mut(|o| o.theme_preference = preference);
    }

    fn load_corpus(&mut self, source: CorpusSource) {
        let result =
            Corpus::load(&source).and_then(|corpus| self.session.replace_corpus(corpus));

        match result {
            Ok(()) => {
                self.settings_data.corpus_path = match &source {
                    CorpusSource::File(path) => Some(path.clone()),
                    CorpusSource::Embedded => None,
                };
                self.corpus_source = source;
                self.save_settings();
            }
            Err(e) => self.modals.error.show_error(
                "Corpus Error",
                format!("Could not load {}.", source.describe()),
                &e,
            ),
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: SettingsData) {
        let font_changed = settings.extra_font_path != self.settings_data.extra_font_path;
        self.settings_data = settings;

        ctx.set_zoom_factor(self.settings_data.clamped_zoom());
        if font_changed {
            self.setup_fonts(ctx);
        }
        self.save_settings();
    }

    /// Persists the theme switch in the top bar.
    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&mut self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            self.modals.error.show_error("Settings Error", "Could not save settings.", &e);
        }
    }
}

impl eframe::App for LinguessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopBar::show(ctx, &self.corpus_source) {
            match action {
                TopBarAction::LoadCorpus(source) => self.load_corpus(source),
                TopBarAction::OpenPreferences => {
                    self.modals.preferences.open_settings(self.settings_data.clone())
                }
            }
        }

        let modal_open = self.modals.preferences.is_open() || self.modals.error.is_open();
        if let Some(event) = quiz_panel(ctx, self.session.state(), &self.theme) {
            if !modal_open {
                if let Err(e) = self.session.apply(event) {
                    self.modals.error.show_error("Quiz Error", "That action failed.", &e);
                }
            }
        }

        self.sync_dark_mode(ctx);

        if let Some(settings) = self.modals.preferences.show(ctx) {
            self.apply_settings(ctx, settings);
        }

        self.modals.error.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::Phase;

    #[test]
    fn test_initial_session_uses_builtin_corpus_by_default() {
        let (session, source, failure) = initial_session(&SettingsData::new()).unwrap();

        assert_eq!(source, CorpusSource::Embedded);
        assert!(failure.is_none());
        assert_eq!(session.state().phase(), Phase::Unanswered);
    }

    #[test]
    fn test_initial_session_falls_back_when_configured_corpus_is_missing() {
        let mut settings = SettingsData::new();
        settings.corpus_path = Some(PathBuf::from("/definitely/not/here/quotes.json"));

        let (session, source, failure) = initial_session(&settings).unwrap();

        assert_eq!(source, CorpusSource::Embedded);
        assert!(matches!(failure, Some(LinguessError::FailedToLoadFile(_))));
        assert!(!session.corpus().is_empty());
    }
}
