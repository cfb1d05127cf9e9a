// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    budget: Duration,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, budget: Duration::ZERO }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, budget: Duration) {
        self.budget = budget;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn attempt(&mut self, n: u32, elapsed: Duration) {
        self.set_status(format!(
            "Loading your attendance... (try {n}, {}s of {}s)",
            elapsed.as_secs(),
            self.budget.as_secs()
        ));
    }
    fn finish(&mut self, found: bool) {
        if found {
            self.set_status("Attendance loaded");
        } else {
            self.set_status("Still no attendance table");
        }
    }
}
