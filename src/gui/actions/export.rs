// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first
    if app.out_path_dirty {
        app.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    if app.records.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    logf!("Export: Begin rows={}, format={:?}", app.records.len(), app.options.export.format);
    let msg = match file::write_export(&app.options.export, &app.records) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            format!("Exported to {}", path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
