use eframe::egui;
use linguess::{
    gui::{
        settings::{
            data::SETTINGS_FILE,
            SettingsData,
        },
        LinguessApp,
    },
    persistence::{
        data_file_exists,
        load_json_or_default,
    },
};

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("linguess=info")),
        )
        .init();

    if !data_file_exists(SETTINGS_FILE) {
        tracing::info!("No {} yet, starting with defaults", SETTINGS_FILE);
    }
    let mut settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
    settings.apply_env_overrides();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Guess The Language")
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Linguess",
        native_options,
        Box::new(|cc| {
            let app = LinguessApp::new(cc, settings)?;
            Ok(Box::new(app))
        }),
    )
}
