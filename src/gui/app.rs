// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    derive::Dashboard,
    model::CourseAttendanceRecord,
};

use super::{actions, components};

/// What a background load hands back to the UI thread.
pub type Outcome = Result<Vec<CourseAttendanceRecord>, String>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let initial = std::env::args().nth(1);
    eframe::run_native(
        "Attendance Hub",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(AppOptions::default(), initial)))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // text fields (mapped into options on use)
    pub source_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // worker -> UI
    pub status: Arc<Mutex<String>>,
    pub outcome: Arc<Mutex<Option<Outcome>>>,
    pub running: bool,

    pub records: Vec<CourseAttendanceRecord>,
    pub dashboard: Option<Dashboard>,
}

impl App {
    pub fn new(options: AppOptions, initial_source: Option<String>) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();
        let mut app = Self {
            options,
            source_text: initial_source.clone().unwrap_or_default(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            outcome: Arc::new(Mutex::new(None)),
            running: false,
            records: Vec::new(),
            dashboard: None,
        };

        logf!("Init: source={:?}, target={}", initial_source, app.options.target);
        if initial_source.is_some() {
            actions::load(&mut app);
        }
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Swap in a fresh course list; the whole dashboard is rebuilt.
    pub fn set_records(&mut self, records: Vec<CourseAttendanceRecord>) {
        self.dashboard = Some(Dashboard::build(&records, self.options.target));
        self.records = records;
    }
}

fn loading(ui: &mut egui::Ui, status: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.heading("Loading your attendance...");
        ui.label(egui::RichText::new(status).weak());
    });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::collect(self);
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            components::source_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.running {
                loading(ui, &self.status_text());
                return;
            }
            if self.dashboard.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a saved attendance page or a folder of portal snapshots.");
                });
                return;
            }

            components::overview::draw(ui, self);
            ui.separator();
            components::bunk_panel::draw(ui, self);
            ui.separator();
            components::export_bar::draw(ui, self);
            ui.separator();
            components::courses::draw(ui, self);
        });
    }
}
