use crate::domain::entities::ThemeMode;
use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// rgba(37, 99, 235, 0.1), premultiplied.
pub const CHIP_FILL: Color32 = Color32::from_rgba_premultiplied(4, 10, 24, 26);
/// #2563eb
pub const CHIP_TEXT: Color32 = Color32::from_rgb(37, 99, 235);
pub const CHIP_ROUNDING: f32 = 999.0;

pub fn error_stroke() -> Stroke {
    Stroke::new(2.0, Color32::RED)
}

pub fn configure_style(ctx: &Context, theme: ThemeMode) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);

    // egui has no reliable system theme lookup; System renders light like the website.
    let mut visuals = match theme {
        ThemeMode::System | ThemeMode::Light => Visuals::light(),
        ThemeMode::Dark => Visuals::dark(),
    };

    visuals.widgets.inactive.rounding = Rounding::same(8.0);
    visuals.widgets.hovered.rounding = Rounding::same(8.0);
    visuals.widgets.active.rounding = Rounding::same(8.0);
    visuals.window_rounding = Rounding::same(12.0);
    visuals.selection.bg_fill = CHIP_TEXT;
    visuals.hyperlink_color = CHIP_TEXT;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}
