// src/surface.rs
//
// The embedded browsing surface, seen from the host.
//
// Host -> surface: the `Surface` trait (load with an init script, evaluate,
// hide, tear down). Surface -> host: `SurfaceEvent`s on an mpsc channel,
// either a URL change or a raw message string posted by the page.
//
// `SnapshotSurface` is the headless implementation: pages are HTML files in
// a directory, named after the last path segment of their URL
// (`.../student/attendance` -> `attendance.html`).

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::bridge::BridgeMessage;
use crate::config::options::PollOptions;
use crate::error::{HubError, Result};
use crate::inject::navigation_script;
use crate::model::Credentials;
use crate::poll::{self, FileSource, PollHandle};
use crate::specs::login_form;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface finished navigating to this URL.
    Navigated(String),
    /// A string the page posted to the host.
    Message(String),
}

pub trait Surface {
    /// Open `url`, arranging for `init_script` to run after every page load.
    fn load(&mut self, url: &str, init_script: &str) -> Result<()>;

    /// Run a script in the current page.
    fn evaluate(&mut self, script: &str) -> Result<()>;

    /// One-shot page redirect.
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.evaluate(&navigation_script(url))
    }

    /// Hidden surfaces keep running scripts; they just aren't shown.
    fn set_hidden(&mut self, hidden: bool);

    /// Stop all page activity. Nothing more is reported afterwards.
    fn teardown(&mut self);
}

/// Headless surface replaying saved portal pages.
pub struct SnapshotSurface {
    dir: PathBuf,
    poll: PollOptions,
    events: Sender<SurfaceEvent>,
    current: Option<String>,
    poller: Option<PollHandle>,
    hidden: bool,
    torn_down: bool,
    evaluated: Vec<String>,
}

impl SnapshotSurface {
    pub fn new(dir: impl Into<PathBuf>, poll: PollOptions) -> (Self, Receiver<SurfaceEvent>) {
        let (events, rx) = mpsc::channel();
        let surface = Self {
            dir: dir.into(),
            poll,
            events,
            current: None,
            poller: None,
            hidden: false,
            torn_down: false,
            evaluated: Vec::new(),
        };
        (surface, rx)
    }

    pub fn page_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.html", page_name(url)))
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Scripts evaluated so far, in order.
    pub fn evaluated(&self) -> &[String] {
        &self.evaluated
    }

    fn open(&mut self, url: &str) {
        if self.torn_down {
            return;
        }
        // The page script restarts its extraction loop on each load.
        if let Some(old) = self.poller.take() {
            old.cancel();
        }

        let path = self.page_path(url);
        if !path.exists() {
            logw!("Surface: no page for {url} ({})", path.display());
        } else if is_login(url) {
            if let Ok(doc) = fs::read_to_string(&path) {
                let fields = login_form::find_fields(&doc);
                logd!("Surface: login fields complete: {}", fields.is_complete());
            }
        }

        self.current = Some(s!(url));
        let _ = self.events.send(SurfaceEvent::Navigated(s!(url)));
        self.poller = Some(poll::spawn(FileSource(path), self.poll, self.events.clone()));
    }

    /// Simulate the user submitting the login form on the current page, then
    /// the portal sending the browser to `next_url`.
    pub fn submit_login(&mut self, typed: Option<&Credentials>, next_url: &str) -> Result<()> {
        let url = self.current.clone().unwrap_or_default();
        let doc = fs::read_to_string(self.page_path(&url))?;

        match login_form::capture_submission(&doc, typed) {
            Some(creds) => {
                let raw = BridgeMessage::credentials(&creds).encode()?;
                let _ = self.events.send(SurfaceEvent::Message(raw));
            }
            None => logd!("Surface: submit on {url} had no login form"),
        }

        self.open(next_url);
        Ok(())
    }
}

impl Surface for SnapshotSurface {
    fn load(&mut self, url: &str, init_script: &str) -> Result<()> {
        let path = self.page_path(url);
        if !path.exists() {
            return Err(HubError::MissingPage(path));
        }
        logd!("Surface: init script is {} bytes", init_script.len());
        self.open(url);
        Ok(())
    }

    /// Scripts are recorded, not run.
    fn evaluate(&mut self, script: &str) -> Result<()> {
        self.evaluated.push(s!(script));
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        self.evaluate(&navigation_script(url))?;
        self.open(url);
        Ok(())
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn teardown(&mut self) {
        if let Some(p) = self.poller.take() {
            p.cancel();
        }
        self.torn_down = true;
        logd!("Surface: torn down");
    }
}

fn page_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

fn is_login(url: &str) -> bool {
    page_name(url) == "login"
}

impl Drop for SnapshotSurface {
    fn drop(&mut self) {
        self.teardown();
    }
}
