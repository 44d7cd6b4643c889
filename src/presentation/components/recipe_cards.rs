use crate::domain::entities::{CardFade, CardVisual};
use eframe::egui::{self, Frame, RichText, Stroke};
use std::time::Duration;

const CARD_GAP: f32 = 8.0;

pub struct RecipeCards;

impl RecipeCards {
    pub fn show(ui: &mut egui::Ui, titles: &[String], fades: &[CardFade], elapsed: Duration) {
        for (index, title) in titles.iter().enumerate() {
            let fade = fades.get(index);
            let visual = fade
                .map(|f| f.visual_at(elapsed))
                .unwrap_or_else(CardVisual::settled);
            // Reserve the full offset so cards below do not move while this one settles.
            let travel = fade.map(|f| f.from.offset).unwrap_or(0.0);

            ui.add_space(visual.offset);

            let visuals = ui.visuals().clone();
            Frame::group(ui.style())
                .fill(visuals.faint_bg_color.gamma_multiply(visual.opacity))
                .stroke(Stroke::new(
                    1.0,
                    visuals
                        .widgets
                        .noninteractive
                        .bg_stroke
                        .color
                        .gamma_multiply(visual.opacity),
                ))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(title)
                            .strong()
                            .size(16.0)
                            .color(visuals.text_color().gamma_multiply(visual.opacity)),
                    );
                });

            ui.add_space(CARD_GAP + travel - visual.offset);
        }
    }
}
