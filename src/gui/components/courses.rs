// src/gui/components/courses.rs
//
// Per-subject table. Percentage is the portal's own figure; the verdict
// column follows the selected bunk target.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    derive::BunkVerdict,
    gui::{app::App, components::standing_color},
};

const HEADERS: [&str; 6] = ["Course", "Held", "Present", "Absent", "%", "Bunk"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(dash) = &app.dashboard else { return };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .column(Column::remainder().at_least(180.0).clip(true))
        .columns(Column::auto().at_least(48.0), 4)
        .column(Column::auto().at_least(110.0))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for c in &dash.courses {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(c.course.as_str());
                    });
                    for n in [c.held, c.present, c.absent] {
                        row.col(|ui| {
                            ui.label(n.to_string());
                        });
                    }
                    row.col(|ui| {
                        let pct = RichText::new(format!("{}%", c.percentage));
                        ui.label(pct.color(standing_color(c.standing)));
                    });
                    row.col(|ui| {
                        let text = RichText::new(c.verdict.to_string());
                        match c.verdict {
                            BunkVerdict::Skip(_) => ui.label(text.strong()),
                            BunkVerdict::Attend(_) => ui.label(text.weak()),
                        };
                    });
                });
            }
        });
}
