use eframe::egui;

pub struct Modal<T> {
    open: bool,
    title: String,
    data: T,
    config: ModalConfig,
}

#[derive(Clone)]
pub struct ModalConfig {
    pub resizable: bool,
    pub min_size: Option<egui::Vec2>,
    /// Darken the window behind the modal. Clicking the darkened area cancels.
    pub show_overlay: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { resizable: false, min_size: Some(egui::Vec2::new(300.0, 150.0)), show_overlay: true }
    }
}

#[derive(Debug, Clone)]
pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> Modal<T> {
    pub fn new_with_data(title: impl Into<String>, data: T) -> Self {
        Self { open: false, title: title.into(), data, config: ModalConfig::default() }
    }

    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Draws the modal while open. Any result from `content` closes it.
    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
    {
        if !self.open {
            return None;
        }

        let clicked_outside = self.config.show_overlay && Self::show_overlay(ctx);

        let mut window = egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(self.config.resizable)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);

        if let Some(min_size) = self.config.min_size {
            window = window.min_size(min_size);
        }

        let data = &mut self.data;
        let result = window.show(ctx, |ui| content(ui, data)).and_then(|response| response.inner);
        let result = result.flatten().or(clicked_outside.then_some(ModalResult::Cancelled));

        if result.is_some() {
            self.open = false;
        }
        result
    }

    fn show_overlay(ctx: &egui::Context) -> bool {
        egui::Area::new(egui::Id::new("modal_overlay"))
            .order(egui::Order::Background)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                let (_rect, response) =
                    ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(100));
                response.clicked()
            })
            .inner
    }
}
