use std::{
    fs,
    path::Path,
    sync::Arc,
};

use eframe::egui;

use crate::core::LinguessError;

const EXTRA_FONT_NAME: &str = "linguess_extra";

pub fn read_font(path: &Path) -> Result<Vec<u8>, LinguessError> {
    let bytes = fs::read(path)
        .map_err(|e| LinguessError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;
    if bytes.is_empty() {
        return Err(LinguessError::FailedToLoadFile(format!("{} is empty", path.display())));
    }
    Ok(bytes)
}

/// egui's defaults, with the extra font appended to both families as a glyph fallback.
pub fn font_definitions(extra_font: Option<Vec<u8>>) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();

    if let Some(bytes) = extra_font {
        fonts
            .font_data
            .insert(EXTRA_FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(EXTRA_FONT_NAME.to_owned());
        }
    }

    fonts
}

/// Installs fonts on the context. On a read failure the defaults are installed
/// and the error is returned for display.
pub fn install_fonts(ctx: &egui::Context, extra_font: Option<&Path>) -> Result<(), LinguessError> {
    let (bytes, result) = match extra_font.map(read_font) {
        Some(Ok(bytes)) => (Some(bytes), Ok(())),
        Some(Err(e)) => (None, Err(e)),
        None => (None, Ok(())),
    };

    if let Some(path) = extra_font.filter(|_| bytes.is_some()) {
        tracing::info!("Registered extra font {}", path.display());
    }
    ctx.set_fonts(font_definitions(bytes));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_font_is_a_fallback_in_both_families() {
        let fonts = font_definitions(Some(vec![0u8; 16]));

        assert!(fonts.font_data.contains_key(EXTRA_FONT_NAME));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            let names = &fonts.families[&family];
            assert_eq!(names.last().map(String::as_str), Some(EXTRA_FONT_NAME));
            assert!(names.len() > 1);
        }
    }

    #[test]
    fn test_no_extra_font_keeps_defaults() {
        let fonts = font_definitions(None);
        assert!(!fonts.font_data.contains_key(EXTRA_FONT_NAME));
    }

    #[test]
    fn test_read_font_rejects_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.ttf");
        fs::write(&empty, b"").unwrap();

        assert!(matches!(read_font(&empty), Err(LinguessError::FailedToLoadFile(_))));
        assert!(matches!(
            read_font(&dir.path().join("missing.ttf")),
            Err(LinguessError::FailedToLoadFile(_))
        ));
    }
}
