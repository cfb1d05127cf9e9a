// src/gui/components/bunk_panel.rs

use eframe::egui::{self, RichText};

use crate::{
    derive::{bunk_policy, BunkTarget, BunkVerdict},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let before = app.options.target;
    let mut target = before;

    ui.horizontal(|ui| {
        ui.strong("Bunk calculator");
        for preset in BunkTarget::presets() {
            ui.selectable_value(&mut target, preset, preset.to_string());
        }
    });

    if target != before {
        app.options.target = target;
        if let Some(dash) = app.dashboard.as_mut() {
            dash.retarget(target);
        }
        logf!("UI: Bunk target → {}", target.percent());
    }

    let Some(dash) = &app.dashboard else { return };
    let pct = target.percent();
    let text = match bunk_policy(dash.totals.present, dash.totals.held, target) {
        BunkVerdict::Skip(n) => format!("You can skip {n} more class(es) overall and stay at {pct}%."),
        BunkVerdict::Attend(0) => format!("You are right at {pct}%. Don't skip."),
        BunkVerdict::Attend(n) => format!("Attend {n} more class(es) in a row to reach {pct}%."),
    };
    ui.label(RichText::new(text).italics());
}
