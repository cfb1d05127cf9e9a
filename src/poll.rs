// src/poll.rs
//
// Extraction polling: try the extractor against the current page every
// `interval` until it yields rows or `timeout` passes. A timeout delivers
// nothing and is only logged at debug level; the host keeps waiting.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::bridge::BridgeMessage;
use crate::config::options::PollOptions;
use crate::model::ScrapedRow;
use crate::progress::{NullProgress, Progress};
use crate::specs::attendance;
use crate::surface::SurfaceEvent;

/// Cancellation is checked at least this often while sleeping.
const SLICE: Duration = Duration::from_millis(25);

/// Whatever can hand over the page's current markup.
pub trait PageSource {
    /// `None` while there is no document to look at.
    fn snapshot(&mut self) -> Option<String>;
}

impl<F: FnMut() -> Option<String>> PageSource for F {
    fn snapshot(&mut self) -> Option<String> {
        self()
    }
}

/// A page dump on disk, re-read on every attempt.
#[derive(Clone, Debug)]
pub struct FileSource(pub PathBuf);

impl PageSource for FileSource {
    fn snapshot(&mut self) -> Option<String> {
        fs::read_to_string(&self.0).ok()
    }
}

/// Blocking poll. Returns the first non-empty extraction, or `None` on
/// timeout or when `cancel` is raised.
pub fn poll_until_ready(
    source: &mut dyn PageSource,
    opts: PollOptions,
    cancel: &AtomicBool,
    progress: &mut dyn Progress,
) -> Option<Vec<ScrapedRow>> {
    let started = Instant::now();
    progress.begin(opts.timeout);
    let mut n = 0u32;

    loop {
        if cancel.load(Ordering::Relaxed) {
            logd!("Poll: cancelled after {n} attempt(s)");
            progress.finish(false);
            return None;
        }

        n += 1;
        if let Some(doc) = source.snapshot() {
            let rows = attendance::extract(&doc);
            if !rows.is_empty() {
                logf!("Poll: {} row(s) on attempt {n}", rows.len());
                progress.finish(true);
                return Some(rows);
            }
        }

        let elapsed = started.elapsed();
        progress.attempt(n, elapsed);
        if elapsed >= opts.timeout {
            logd!("Poll: gave up after {n} attempt(s) ({elapsed:?})");
            progress.finish(false);
            return None;
        }

        let wait = opts.interval.min(opts.timeout - elapsed);
        sleep_unless_cancelled(wait, cancel);
    }
}

fn sleep_unless_cancelled(total: Duration, cancel: &AtomicBool) {
    // Too far out to represent means no end; only `cancel` stops it.
    let until = Instant::now().checked_add(total);
    loop {
        if cancel.load(Ordering::Relaxed) {
            return;
        }
        let left = match until {
            Some(until) => until.saturating_duration_since(Instant::now()),
            None => SLICE,
        };
        if left.is_zero() {
            return;
        }
        thread::sleep(SLICE.min(left));
    }
}

/// Background poller. Dropping the handle cancels it.
pub struct PollHandle {
    cancel: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Wait for the poller thread to end.
    pub fn join(mut self) {
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Poll `source` on its own thread and post the rows to `events` as an
/// `ATTENDANCE_DATA` message, the way the page script would.
pub fn spawn<S>(mut source: S, opts: PollOptions, events: Sender<SurfaceEvent>) -> PollHandle
where
    S: PageSource + Send + 'static,
{
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    let thread = thread::spawn(move || {
        let Some(data) = poll_until_ready(&mut source, opts, &flag, &mut NullProgress) else {
            return;
        };
        match (BridgeMessage::AttendanceData { data }).encode() {
            Ok(raw) => {
                // Host gone is fine: nobody is waiting any more.
                let _ = events.send(SurfaceEvent::Message(raw));
            }
            Err(e) => loge!("Poll: could not encode rows: {e}"),
        }
    });

    PollHandle { cancel, thread: Some(thread) }
}
