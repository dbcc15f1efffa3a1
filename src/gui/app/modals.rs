use crate::gui::{
    error_modal::ErrorModal,
    settings::PreferencesModal,
};

#[derive(Default)]
pub struct Modals {
    pub error: ErrorModal,
    pub preferences: PreferencesModal,
}
