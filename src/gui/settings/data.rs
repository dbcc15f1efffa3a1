use std::{
    env,
    path::PathBuf,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const CORPUS_ENV: &str = "LINGUESS_CORPUS";
pub const FONT_ENV: &str = "LINGUESS_FONT";

pub const MIN_ZOOM: f32 = 0.75;
pub const MAX_ZOOM: f32 = 3.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom: f32,
    /// `None` means the built-in corpus.
    pub corpus_path: Option<PathBuf>,
    /// Font file registered ahead of egui's defaults, for scripts they lack.
    pub extra_font_path: Option<PathBuf>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, zoom: 1.5, corpus_path: None, extra_font_path: None }
    }
}

impl SettingsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides from `LINGUESS_CORPUS` and `LINGUESS_FONT`, ignoring empty values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(env::var(CORPUS_ENV).ok(), env::var(FONT_ENV).ok());
    }

    fn apply_overrides(&mut self, corpus: Option<String>, font: Option<String>) {
        if let Some(corpus) = corpus.filter(|v| !v.trim().is_empty()) {
            tracing::info!("Using corpus from {}: {}", CORPUS_ENV, corpus);
            self.corpus_path = Some(PathBuf::from(corpus));
        }
        if let Some(font) = font.filter(|v| !v.trim().is_empty()) {
            tracing::info!("Using font from {}: {}", FONT_ENV, font);
            self.extra_font_path = Some(PathBuf::from(font));
        }
    }

    pub fn clamped_zoom(&self) -> f32 {
        if self.zoom.is_finite() {
            self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            Self::default().zoom
        }
    }
}
