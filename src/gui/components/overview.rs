// src/gui/components/overview.rs
//
// Overall card: aggregate percentage in its standing colour, plus totals.

use eframe::egui::{self, RichText};

use crate::gui::{app::App, components::standing_color};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(dash) = &app.dashboard else { return };

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label("Overall");
            ui.label(
                RichText::new(format!("{}%", dash.overall))
                    .size(36.0)
                    .strong()
                    .color(standing_color(dash.standing)),
            );
        });
        ui.add_space(24.0);
        egui::Grid::new("totals").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
            ui.label("Classes held");
            ui.label(dash.totals.held.to_string());
            ui.end_row();
            ui.label("Attended");
            ui.label(dash.totals.present.to_string());
            ui.end_row();
            ui.label("Missed");
            ui.label(dash.totals.absent.to_string());
            ui.end_row();
        });
    });
}
