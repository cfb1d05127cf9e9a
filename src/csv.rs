// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::model::{CourseAttendanceRecord, ScrapedRow};

/* ---------------- Parsing ---------------- */

/// Small CSV/TSV reader, tolerant of quotes and CRLF. Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                push_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without newline, even if a quote was left open.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, &mut row);
    }
    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/* ---------------- Export ---------------- */

/// Records as text, one line per course. The percentage column carries the
/// portal's figure as-is.
pub fn records_to_string(records: &[CourseAttendanceRecord], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &ScrapedRow::HEADERS, sep);
    }
    for r in records {
        let row = [
            r.course.clone(),
            r.classes_held.to_string(),
            r.classes_present.to_string(),
            r.classes_absent.to_string(),
            r.percentage.clone(),
        ];
        let _ = write_row(&mut buf, &row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
