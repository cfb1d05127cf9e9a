// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use attendance_hub::{config::consts::STORE_DIR, gui, logging};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = logging::init(Path::new(STORE_DIR)) {
        eprintln!("Logging disabled: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Attendance Hub")
            .with_inner_size([760.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
