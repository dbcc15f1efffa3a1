use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// Dark and light palettes; colour lookups follow the context's current mode.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: Palette::dracula(), light: Palette::dracula_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn primary(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).purple
    }

    pub fn content(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).foreground
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).comment
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn destructive(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.primary(ctx))
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl Palette {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(60, 160, 90),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
        }
    }
}

/// Registers both palettes; egui switches between them with the theme preference.
pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let tint = |base: WidgetVisuals, bg_fill: Color32, outline: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: Stroke { color: outline, ..base.bg_stroke },
        fg_stroke: Stroke { color: palette.foreground, ..base.fg_stroke },
        ..base
    };

    let mut widgets = default.widgets.clone();
    widgets.noninteractive =
        tint(default.widgets.noninteractive, palette.background, palette.background_dark);
    widgets.inactive =
        tint(default.widgets.inactive, palette.background_light, palette.background_dark);
    widgets.hovered = tint(default.widgets.hovered, palette.selection, palette.cyan);
    widgets.active = tint(default.widgets.active, palette.selection, palette.cyan);
    widgets.open = tint(default.widgets.open, palette.background_dark, palette.purple);

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets,
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.cyan,
            extreme_bg_color: palette.background_darker,
            error_fg_color: palette.red,
            warn_fg_color: palette.orange,
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_light, ..default.window_stroke },
            panel_fill: palette.background_dark,
            ..default
        },
    );
}
