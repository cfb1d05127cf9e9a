// src/gui/actions/load.rs
use std::thread;

use crate::{
    gui::{app::App, progress::GuiProgress},
    runner::{self, Source},
};

/// Start loading from whatever the source field names, on a worker thread.
pub fn load(app: &mut App) {
    if app.running {
        return;
    }
    let text = app.source_text.trim();
    if text.is_empty() {
        app.status("Choose a saved page or a snapshot folder first");
        return;
    }

    let source = Source::detect(text);
    let opts = app.options.clone();
    let status = app.status.clone();
    let outcome = app.outcome.clone();

    logf!("Load: Begin {:?}", source);
    app.running = true;
    app.status("Loading your attendance...");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = runner::load(&source, &opts, &mut prog).map_err(|e| e.to_string());
        if let Ok(mut slot) = outcome.lock() {
            *slot = Some(res);
        }
    });
}

/// Pick up a finished load, if any. Called every frame.
pub fn collect(app: &mut App) {
    let done = app.outcome.lock().ok().and_then(|mut slot| slot.take());
    let Some(res) = done else { return };
    app.running = false;

    match res {
        Ok(records) if records.is_empty() => {
            // Keep whatever was shown before; nothing new arrived.
            logd!("Load: no attendance rows");
            app.status("No attendance table found yet");
        }
        Ok(records) => {
            logf!("Load: OK courses={}", records.len());
            app.status(format!("Loaded {} course(s)", records.len()));
            app.set_records(records);
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
