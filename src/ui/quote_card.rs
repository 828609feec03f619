//! Quote display and action buttons

use eframe::egui::{self, Margin, RichText};

use crate::app::{Action, QuipApp};
use crate::mood::Animation;

const BASE_MARGIN: f32 = 16.0;
const QUOTE_SIZE: f32 = 19.0;

/// Render the quote card, the action row, and the status flash
pub fn render_quote_card(app: &mut QuipApp, ui: &mut egui::Ui) {
    let theme = app.theme.clone();

    let (dx, dy, alpha, scale) = app
        .quote_anim
        .as_ref()
        .map(|anim| transform(anim.kind, anim.progress()))
        .unwrap_or((0.0, 0.0, 1.0, 1.0));

    // The transition offsets the text by skewing the card's inner margins,
    // so the card itself stays put.
    egui::Frame::none()
        .fill(theme.bg_medium)
        .rounding(8.0)
        .inner_margin(Margin {
            left: BASE_MARGIN + dx,
            right: BASE_MARGIN - dx,
            top: BASE_MARGIN + dy,
            bottom: BASE_MARGIN - dy,
        })
        .show(ui, |ui| {
            ui.set_min_height(110.0);
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&app.state.quote)
                        .size(QUOTE_SIZE * scale)
                        .italics()
                        .color(theme.text_primary.gamma_multiply(alpha)),
                );
            });
        });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        if ui.button("New quote").clicked() {
            app.pending.push(Action::NewQuote);
        }
        if ui.button("Copy").clicked() {
            app.pending.push(Action::CopyQuote);
        }
        if ui.button("Save").clicked() {
            app.pending.push(Action::SaveFavorite);
        }

        if let Some(flash) = &app.flash {
            let color = if flash.ok { theme.success } else { theme.error };
            ui.label(RichText::new(&flash.text).color(color));
        }
    });
}

/// Map a transition effect and its progress to (dx, dy, alpha, scale)
fn transform(kind: Animation, t: f32) -> (f32, f32, f32, f32) {
    use std::f32::consts::PI;
    match kind {
        Animation::Bounce => {
            let dy = -((t * PI * 3.0).sin() * (1.0 - t) * 14.0).abs();
            (0.0, dy, 1.0, 1.0)
        }
        Animation::Fade => (0.0, 0.0, t, 1.0),
        Animation::Shake => {
            let dx = (t * PI * 8.0).sin() * (1.0 - t) * 8.0;
            (dx, 0.0, 1.0, 1.0)
        }
        Animation::Dissolve => (0.0, 0.0, t * t, 1.0),
        Animation::Punch => (0.0, 0.0, 1.0, 1.0 + 0.25 * (1.0 - t)),
    }
}
