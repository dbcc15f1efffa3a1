pub mod app;
pub mod error_modal;
pub mod fonts;
pub mod modal;
pub mod quiz_panel;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::LinguessApp;
