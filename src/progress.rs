// src/progress.rs
use std::time::Duration;

/// Progress reporting for the extraction poller.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first attempt with the overall time budget.
    fn begin(&mut self, _budget: Duration) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each attempt that found nothing yet.
    fn attempt(&mut self, _n: u32, _elapsed: Duration) {}

    /// Called at the end: `found` is false on timeout or cancellation.
    fn finish(&mut self, _found: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
