// src/model.rs
//
// Row shapes.
// - ScrapedRow: exactly what the page posts, all strings.
// - CourseAttendanceRecord: what the dashboard computes with.
// - Credentials: the saved login pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::sanitize::{normalize_course, parse_count};

/// One attendance table row as scraped. `percentage` has its `%` removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedRow {
    pub course: String,
    pub marked: String,
    pub present: String,
    pub absent: String,
    pub percentage: String,
}

impl ScrapedRow {
    pub const HEADERS: [&'static str; 5] = ["Course", "Held", "Present", "Absent", "Percentage"];

    pub fn cells(&self) -> [&str; 5] {
        [
            self.course.as_str(),
            self.marked.as_str(),
            self.present.as_str(),
            self.absent.as_str(),
            self.percentage.as_str(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAttendanceRecord {
    pub course: String,
    pub classes_held: u32,
    pub classes_present: u32,
    /// Not reconciled with held - present.
    pub classes_absent: u32,
    /// As reported by the portal; may disagree with present/held.
    pub percentage: String,
}

impl CourseAttendanceRecord {
    /// Integer view of the reported percentage (`"87.5"` -> 87).
    pub fn percentage_value(&self) -> u32 {
        parse_count(&self.percentage)
    }
}

impl From<&ScrapedRow> for CourseAttendanceRecord {
    fn from(row: &ScrapedRow) -> Self {
        Self {
            course: normalize_course(&row.course),
            classes_held: parse_count(&row.marked),
            classes_present: parse_count(&row.present),
            classes_absent: parse_count(&row.absent),
            percentage: row.percentage.trim().to_string(),
        }
    }
}

pub fn records_from_rows(rows: &[ScrapedRow]) -> Vec<CourseAttendanceRecord> {
    rows.iter().map(CourseAttendanceRecord::from).collect()
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(course: &str, marked: &str, present: &str, absent: &str, pct: &str) -> ScrapedRow {
        ScrapedRow {
            course: s!(course),
            marked: s!(marked),
            present: s!(present),
            absent: s!(absent),
            percentage: s!(pct),
        }
    }

    #[test]
    fn record_parses_counts_and_normalizes_name() {
        let rec = CourseAttendanceRecord::from(&row("Intro\nto  CS", "20", "18", "2", "90"));
        assert_eq!(rec.course, "Intro to CS");
        assert_eq!((rec.classes_held, rec.classes_present, rec.classes_absent), (20, 18, 2));
        assert_eq!(rec.percentage_value(), 90);
    }

    #[test]
    fn unparseable_counts_become_zero() {
        let rec = CourseAttendanceRecord::from(&row("Lab", "--", "n/a", "", "0.0"));
        assert_eq!((rec.classes_held, rec.classes_present, rec.classes_absent), (0, 0, 0));
        assert_eq!(rec.percentage_value(), 0);
    }

    #[test]
    fn debug_hides_password() {
        let creds = Credentials::new("student", "hunter2");
        let shown = format!("{creds:?}");
        assert!(shown.contains("student"));
        assert!(!shown.contains("hunter2"));
    }
}
