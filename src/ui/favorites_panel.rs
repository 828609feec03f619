//! Favorites list

use eframe::egui::{self, RichText};

use crate::app::{Action, QuipApp};

/// Render the favorites list with per-item removal and bulk clear
pub fn render_favorites_panel(app: &mut QuipApp, ui: &mut egui::Ui) {
    let theme = app.theme.clone();

    ui.horizontal(|ui| {
        ui.heading(RichText::new("Favorites").size(15.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_any = !app.state.favorites.is_empty();
            if ui
                .add_enabled(has_any, egui::Button::new("Clear all"))
                .clicked()
            {
                app.pending.push(Action::ClearFavorites);
            }
        });
    });

    ui.add_space(4.0);

    if app.state.favorites.is_empty() {
        ui.label(
            RichText::new("Nothing saved yet. Lower your standards and hit \"Save\".")
                .italics()
                .color(theme.text_muted),
        );
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for favorite in app.state.favorites.clone() {
                egui::Frame::none()
                    .fill(theme.bg_medium)
                    .rounding(6.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(favorite.mood.label())
                                        .size(11.0)
                                        .color(theme.accent),
                                );
                                ui.label(
                                    RichText::new(&favorite.text).color(theme.text_secondary),
                                );
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Remove").clicked() {
                                        app.pending.push(Action::RemoveFavorite(favorite.id));
                                    }
                                },
                            );
                        });
                    });
                ui.add_space(6.0);
            }
        });
}
