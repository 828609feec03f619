//! Mood selector bar

use eframe::egui::{self, Color32, RichText, Rounding, Vec2};

use crate::app::{Action, QuipApp};
use crate::mood::Mood;

/// Render the mood selector row and the mood badge
pub fn render_mood_bar(app: &mut QuipApp, ui: &mut egui::Ui) {
    let theme = app.theme.clone();

    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for mood in Mood::ALL {
            let is_active = app.state.mood == mood;

            let (bg, text_color) = if is_active {
                (theme.accent_muted, theme.text_primary)
            } else {
                (Color32::TRANSPARENT, theme.text_secondary)
            };

            let button = egui::Button::new(RichText::new(mood.label()).color(text_color))
                .fill(bg)
                .rounding(Rounding::same(6.0))
                .min_size(Vec2::new(56.0, 26.0));

            // Clicking the active mood counts too: it re-rolls the quote
            if ui.add(button).clicked() {
                app.pending.push(Action::SelectMood(mood));
            }
        }
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Mood:").color(theme.text_muted).size(12.0));
        ui.label(
            RichText::new(app.state.mood.label())
                .color(theme.accent)
                .size(12.0)
                .strong(),
        );
    });
    ui.add_space(4.0);
}
