// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::derive::BunkTarget;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub portal: PortalOptions,
    pub poll: PollOptions,
    pub export: ExportOptions,
    pub store_dir: PathBuf,
    pub target: BunkTarget,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            portal: PortalOptions::default(),
            poll: PollOptions::default(),
            export: ExportOptions::default(),
            store_dir: PathBuf::from(STORE_DIR),
            target: BunkTarget::default(),
        }
    }
}

/// Where the portal lives and which paths mean what.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalOptions {
    pub base_url: String,
    pub login_path: String,
    pub dashboard_path: String,
    pub attendance_path: String,
}

impl Default for PortalOptions {
    fn default() -> Self {
        Self {
            base_url: s!(PORTAL_BASE),
            login_path: s!(LOGIN_PATH),
            dashboard_path: s!(DASHBOARD_PATH),
            attendance_path: s!(ATTENDANCE_PATH),
        }
    }
}

impl PortalOptions {
    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn login_url(&self) -> String { self.join(&self.login_path) }
    pub fn dashboard_url(&self) -> String { self.join(&self.dashboard_path) }
    pub fn attendance_url(&self) -> String { self.join(&self.attendance_path) }

    /// Login success is inferred from the URL alone.
    pub fn is_dashboard(&self, url: &str) -> bool {
        url.contains(&self.dashboard_path)
    }

    pub fn is_attendance(&self, url: &str) -> bool {
        url.contains(&self.attendance_path)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(POLL_INTERVAL_MS),
            timeout: Duration::from_millis(POLL_TIMEOUT_MS),
        }
    }
}

impl PollOptions {
    pub fn new(interval_ms: u64, timeout_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms.max(1)),
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, include_headers: true, out: None }
    }
}

impl ExportOptions {
    /// Explicit path wins; a directory hint gets the default file name;
    /// nothing at all means `out/attendance.<ext>`.
    pub fn out_path(&self) -> PathBuf {
        let file = format!("{}.{}", DEFAULT_FILE, self.format.ext());
        match &self.out {
            Some(p) if looks_like_dir(p) => p.join(file),
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR).join(file),
        }
    }

    pub fn set_path(&mut self, text: &str) {
        let t = text.trim();
        self.out = if t.is_empty() { None } else { Some(PathBuf::from(t)) };
    }
}

fn looks_like_dir(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\') || p.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_urls_join_without_double_slash() {
        let mut portal = PortalOptions::default();
        portal.base_url = s!("https://portal.example/");
        assert_eq!(portal.login_url(), "https://portal.example/student/login");
        assert_eq!(portal.attendance_url(), "https://portal.example/student/attendance");
    }

    #[test]
    fn dashboard_detection_is_substring_based() {
        let portal = PortalOptions::default();
        assert!(portal.is_dashboard("https://x/student/dashboard?tab=1"));
        assert!(!portal.is_dashboard("https://x/student/login"));
    }

    #[test]
    fn export_path_defaults_follow_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("out").join("attendance.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("out").join("attendance.tsv"));
        export.set_path("reports/");
        assert_eq!(export.out_path(), PathBuf::from("reports/").join("attendance.tsv"));
        export.set_path("mine.txt");
        assert_eq!(export.out_path(), PathBuf::from("mine.txt"));
    }
}
