// src/runner.rs
//
// Headless entry points shared by the CLI and the GUI's background worker.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crate::config::options::{AppOptions, PollOptions};
use crate::error::Result;
use crate::model::{records_from_rows, CourseAttendanceRecord, Credentials};
use crate::poll::{poll_until_ready, FileSource};
use crate::progress::Progress;
use crate::session::{Phase, Session};
use crate::specs::attendance;
use crate::store::CredentialStore;
use crate::surface::SnapshotSurface;

/// Slack on top of the poll timeout for navigation events to drain.
const REPLAY_GRACE: Duration = Duration::from_secs(2);

/// Where attendance comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// One saved attendance page.
    Page(PathBuf),
    /// A directory of saved portal pages (`login.html`, `dashboard.html`,
    /// `attendance.html`) replayed as a full session.
    Snapshots(PathBuf),
}

impl Source {
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() { Source::Snapshots(path) } else { Source::Page(path) }
    }

    pub fn path(&self) -> &Path {
        match self {
            Source::Page(p) | Source::Snapshots(p) => p,
        }
    }
}

/// Result of a replayed session.
#[derive(Debug)]
pub struct Replay {
    pub phase: Phase,
    pub records: Vec<CourseAttendanceRecord>,
    /// What the store holds afterwards.
    pub credentials: Credentials,
}

/// One extraction attempt over a saved page.
pub fn parse_page(page: &Path) -> Result<Vec<CourseAttendanceRecord>> {
    let doc = fs::read_to_string(page)?;
    Ok(records_from_rows(&attendance::extract(&doc)))
}

/// Poll a page file until the table shows up or the poll times out.
/// `None` on timeout, like the page script.
pub fn watch(
    page: &Path,
    poll: PollOptions,
    progress: &mut dyn Progress,
) -> Option<Vec<CourseAttendanceRecord>> {
    progress.log(&format!("Watching {}", page.display()));
    let never = AtomicBool::new(false);
    let rows = poll_until_ready(&mut FileSource(page.to_path_buf()), poll, &never, progress)?;
    Some(records_from_rows(&rows))
}

/// Run a whole session against saved pages: load the login page, submit its
/// form (with `typed` values if given), follow the portal to the dashboard,
/// and let the session redirect to attendance and collect the table.
pub fn replay(
    dir: &Path,
    opts: &AppOptions,
    typed: Option<&Credentials>,
    progress: &mut dyn Progress,
) -> Result<Replay> {
    let store = CredentialStore::open(&opts.store_dir)?;
    let (surface, events) = SnapshotSurface::new(dir, opts.poll);
    let mut session = Session::new(surface, opts.portal.clone(), opts.poll, Some(store));

    progress.log("Opening login page");
    session.start()?;
    session.pump(&events);

    let dashboard = opts.portal.dashboard_url();
    session.surface_mut().submit_login(typed, &dashboard)?;
    progress.log("Loading your attendance...");

    let phase = session.run(&events, opts.poll.timeout + REPLAY_GRACE);
    logf!("Replay: finished in {phase:?}");
    progress.finish(phase == Phase::Ready);

    let credentials = session.credentials().clone();
    Ok(Replay { phase, records: session.into_records(), credentials })
}

/// Records from either kind of source. A replay that never reached `Ready`
/// yields an empty list.
pub fn load(
    source: &Source,
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Result<Vec<CourseAttendanceRecord>> {
    match source {
        Source::Page(p) => parse_page(p),
        Source::Snapshots(dir) => Ok(replay(dir, opts, None, progress)?.records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;

    #[test]
    fn detect_tells_dirs_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("attendance.html");
        fs::write(&page, "").unwrap();
        assert_eq!(Source::detect(dir.path()), Source::Snapshots(dir.path().to_path_buf()));
        assert_eq!(Source::detect(&page), Source::Page(page.clone()));
    }

    #[test]
    fn parse_page_without_table_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("attendance.html");
        fs::write(&page, "<p>Please wait</p>").unwrap();
        assert!(parse_page(&page).unwrap().is_empty());
    }

    #[test]
    fn watch_times_out_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let got = watch(&dir.path().join("nope.html"), PollOptions::new(5, 30), &mut NullProgress);
        assert!(got.is_none());
    }
}
