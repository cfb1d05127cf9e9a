// src/gui/components/source_bar.rs
//
// Path to a saved attendance page, or a folder of portal snapshots to replay.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Source:");
        let edit = egui::TextEdit::singleline(&mut app.source_text)
            .hint_text("attendance.html or snapshot folder")
            .desired_width(ui.available_width() - 80.0);
        let resp = ui.add_enabled(!app.running, edit);
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.add_enabled(!app.running, egui::Button::new("Load")).clicked() || enter {
            actions::load(app);
        }
    });
}
