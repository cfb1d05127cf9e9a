// src/session.rs
//
// Drives one login-to-attendance session over a `Surface`.
//
//   AwaitingLogin --dashboard url--> Redirecting --attendance url--> AwaitingData
//   any of the above --non-empty data--> Ready
//
// The redirect is issued only on leaving AwaitingLogin, so seeing the
// dashboard again later does nothing. Credentials are saved in every phase.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::bridge::BridgeMessage;
use crate::config::options::{PollOptions, PortalOptions};
use crate::error::Result;
use crate::inject::page_script;
use crate::model::{records_from_rows, CourseAttendanceRecord, Credentials};
use crate::store::CredentialStore;
use crate::surface::{Surface, SurfaceEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingLogin,
    Redirecting,
    AwaitingData,
    Ready,
}

impl Phase {
    /// The host shows its loading indicator in these phases.
    pub fn is_loading(self) -> bool {
        matches!(self, Phase::Redirecting | Phase::AwaitingData)
    }
}

pub struct Session<S: Surface> {
    surface: S,
    portal: PortalOptions,
    poll: PollOptions,
    store: Option<CredentialStore>,
    saved: Credentials,
    phase: Phase,
    records: Vec<CourseAttendanceRecord>,
}

impl<S: Surface> Session<S> {
    /// `store` is optional so a session can run without touching disk.
    pub fn new(
        surface: S,
        portal: PortalOptions,
        poll: PollOptions,
        store: Option<CredentialStore>,
    ) -> Self {
        let saved = store.as_ref().map(CredentialStore::credentials).unwrap_or_default();
        Self {
            surface,
            portal,
            poll,
            store,
            saved,
            phase: Phase::AwaitingLogin,
            records: Vec::new(),
        }
    }

    /// Open the login page with the autofill/capture/extraction script.
    pub fn start(&mut self) -> Result<()> {
        let url = self.portal.login_url();
        logf!("Session: loading {url}");
        let script = page_script(&self.saved, &self.poll);
        self.surface.load(&url, &script)
    }

    pub fn handle(&mut self, event: SurfaceEvent) -> Phase {
        match event {
            SurfaceEvent::Navigated(url) => self.on_navigated(&url),
            SurfaceEvent::Message(raw) => self.on_message(&raw),
        }
        self.phase
    }

    fn on_navigated(&mut self, url: &str) {
        logd!("Session: at {url} ({:?})", self.phase);
        match self.phase {
            Phase::AwaitingLogin if self.portal.is_dashboard(url) => {
                self.set_phase(Phase::Redirecting);
                self.surface.set_hidden(true);
                let target = self.portal.attendance_url();
                if let Err(e) = self.surface.navigate(&target) {
                    loge!("Session: redirect to {target} failed: {e}");
                }
            }
            Phase::Redirecting if self.portal.is_attendance(url) => {
                self.set_phase(Phase::AwaitingData);
            }
            _ => {}
        }
    }

    fn on_message(&mut self, raw: &str) {
        let msg = match BridgeMessage::decode(raw) {
            Ok(m) => m,
            Err(e) => {
                logw!("Session: ignoring message: {e}");
                return;
            }
        };

        match msg {
            BridgeMessage::AttendanceData { data } if data.is_empty() => {
                logd!("Session: empty attendance payload");
            }
            BridgeMessage::AttendanceData { data } => {
                self.records = records_from_rows(&data);
                logf!("Session: {} course(s) received", self.records.len());
                if self.phase != Phase::Ready {
                    self.set_phase(Phase::Ready);
                    self.surface.teardown();
                }
            }
            BridgeMessage::SaveCredentials { username, password } => {
                self.saved = Credentials { username, password };
                if let Some(store) = self.store.as_mut() {
                    if let Err(e) = store.save(&self.saved) {
                        loge!("Session: could not save credentials: {e}");
                    }
                }
            }
        }
    }

    fn set_phase(&mut self, next: Phase) {
        logf!("Session: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Handle everything already queued without blocking.
    pub fn pump(&mut self, events: &Receiver<SurfaceEvent>) -> Phase {
        while let Ok(ev) = events.try_recv() {
            self.handle(ev);
        }
        self.phase
    }

    /// Block until `Ready`, the deadline passes, or the channel closes.
    pub fn run(&mut self, events: &Receiver<SurfaceEvent>, deadline: Duration) -> Phase {
        // A deadline past what `Instant` can hold waits on the channel alone.
        let until = Instant::now().checked_add(deadline);
        while self.phase != Phase::Ready {
            let ev = match until {
                Some(until) => {
                    let left = until.saturating_duration_since(Instant::now());
                    if left.is_zero() {
                        break;
                    }
                    match events.recv_timeout(left) {
                        Ok(ev) => ev,
                        Err(RecvTimeoutError::Timeout) => break,
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                None => match events.recv() {
                    Ok(ev) => ev,
                    Err(_) => break,
                },
            };
            self.handle(ev);
        }
        self.phase
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn records(&self) -> &[CourseAttendanceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CourseAttendanceRecord> {
        self.records
    }

    /// What the next page load would autofill.
    pub fn credentials(&self) -> &Credentials {
        &self.saved
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
