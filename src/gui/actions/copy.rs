// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::records_to_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.options.export;
    let txt = records_to_string(&app.records, export.include_headers, export.format.delim());
    logf!("Copy: rows={}, format={:?}", app.records.len(), export.format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
