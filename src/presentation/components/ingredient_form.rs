use crate::domain::entities::Chip;
use crate::presentation::style;
use eframe::egui::{self, Frame, Margin, RichText, Stroke, TextEdit};

#[derive(Default)]
pub struct IngredientFormResponse {
    pub edited: bool,
    pub submitted: bool,
}

pub struct IngredientForm;

impl IngredientForm {
    pub fn show(
        ui: &mut egui::Ui,
        ingredients: &mut String,
        chips: &[Chip],
        highlighted: bool,
    ) -> IngredientFormResponse {
        let mut response = IngredientFormResponse::default();

        ui.label("What's in your kitchen? (comma separated)");

        let stroke = if highlighted {
            style::error_stroke()
        } else {
            Stroke::NONE
        };

        let input = Frame::none()
            .stroke(stroke)
            .rounding(4.0)
            .show(ui, |ui| {
                ui.add(
                    TextEdit::singleline(ingredients)
                        .hint_text("eggs, milk, flour")
                        .desired_width(f32::INFINITY),
                )
            })
            .inner;

        response.edited = input.changed();
        let pressed_enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(10.0);
        Self::show_chips(ui, chips);
        ui.add_space(10.0);

        response.submitted = ui.button("Find Recipes").clicked() || pressed_enter;
        response
    }

    fn show_chips(ui: &mut egui::Ui, chips: &[Chip]) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
            for chip in chips {
                Frame::none()
                    .fill(style::CHIP_FILL)
                    .rounding(style::CHIP_ROUNDING)
                    .inner_margin(Margin::symmetric(8.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&chip.label)
                                .color(style::CHIP_TEXT)
                                .size(13.0),
                        );
                    });
            }
        });
    }
}
