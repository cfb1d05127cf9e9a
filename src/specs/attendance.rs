// src/specs/attendance.rs
//! Reader for the attendance page.
//!
//! Purpose:
//! - Find the first `<table>` whose rendered text mentions "Total Attendance".
//! - Read its body rows (`tbody tr`, falling back to every `tr`) and keep rows
//!   with at least five cells: course, held, present, absent, percentage.
//! - Skip the "Courses" header row, "Total Number ..." summary rows, and any
//!   row whose percentage cell has no `%` yet.
//!
//! Non-Responsibilities:
//! - No retries or timing (see `poll`).
//! - No arithmetic; counts stay strings here (see `model` / `derive`).
//!
//! An empty result is "page not ready", never an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{HEADER_LABEL, MIN_COLUMNS, SUMMARY_MARKER, TABLE_MARKER};
use crate::core::html::{inner_text, selector};
use crate::core::sanitize::{normalize_course, strip_percent};
use crate::model::ScrapedRow;

static TABLES: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static BODY_ROWS: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static ALL_ROWS: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELLS: LazyLock<Selector> = LazyLock::new(|| selector("td, th"));

/// Parse `doc` and extract attendance rows in document order.
pub fn extract(doc: &str) -> Vec<ScrapedRow> {
    extract_from(&Html::parse_document(doc))
}

pub fn extract_from(html: &Html) -> Vec<ScrapedRow> {
    for (ix, table) in html.select(&TABLES).enumerate() {
        if !inner_text(table).contains(TABLE_MARKER) {
            continue;
        }
        let rows = table_rows(table);
        if !rows.is_empty() {
            logd!("Attendance: table #{ix} gave {} row(s)", rows.len());
            return rows;
        }
        logd!("Attendance: table #{ix} has the marker but no data rows yet");
    }
    Vec::new()
}

fn table_rows(table: ElementRef<'_>) -> Vec<ScrapedRow> {
    let mut rows: Vec<ElementRef<'_>> = table.select(&BODY_ROWS).collect();
    if rows.is_empty() {
        rows = table.select(&ALL_ROWS).collect();
    }
    rows.into_iter().filter_map(parse_row).collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<ScrapedRow> {
    let cells: Vec<String> = row
        .select(&CELLS)
        .map(|c| inner_text(c).trim().to_string())
        .collect();
    if cells.len() < MIN_COLUMNS {
        return None;
    }

    let course = normalize_course(&cells[0]);
    if course == HEADER_LABEL || course.contains(SUMMARY_MARKER) {
        return None;
    }
    if course.is_empty() || !cells[4].contains('%') {
        return None;
    }

    Some(ScrapedRow {
        course,
        marked: cells[1].clone(),
        present: cells[2].clone(),
        absent: cells[3].clone(),
        percentage: strip_percent(&cells[4]),
    })
}
