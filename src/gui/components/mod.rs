// src/gui/components/mod.rs
pub mod bunk_panel;
pub mod courses;
pub mod export_bar;
pub mod overview;
pub mod source_bar;

use eframe::egui::Color32;

use crate::derive::Standing;

pub(crate) fn standing_color(standing: Standing) -> Color32 {
    match standing {
        Standing::Good => Color32::from_rgb(0x2e, 0x9e, 0x55),
        Standing::Warning => Color32::from_rgb(0xd9, 0x8e, 0x04),
        Standing::Critical => Color32::from_rgb(0xd6, 0x3a, 0x3a),
    }
}
