// src/inject.rs
//
// Host -> page scripts for a real webview.
// - page_script: runs after every page load; autofills saved credentials,
//   reports login submissions, polls for the attendance table.
// - navigation_script: the one-shot redirect to the attendance page.
//
// Every value spliced into JavaScript goes through a JSON string literal.

use crate::config::consts::{
    HEADER_LABEL, MIN_COLUMNS, PASSWORD_SELECTOR, SUMMARY_MARKER, TABLE_MARKER, USERNAME_SELECTOR,
};
use crate::config::options::PollOptions;
use crate::model::Credentials;

const PAGE_SCRIPT: &str = include_str!("assets/page_script.js");

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| s!("\"\""))
}

pub fn page_script(saved: &Credentials, poll: &PollOptions) -> String {
    let subs: [(&str, String); 10] = [
        ("__SAVED_USERNAME__", js_string(&saved.username)),
        ("__SAVED_PASSWORD__", js_string(&saved.password)),
        ("__USERNAME_SELECTOR__", js_string(USERNAME_SELECTOR)),
        ("__PASSWORD_SELECTOR__", js_string(PASSWORD_SELECTOR)),
        ("__TABLE_MARKER__", js_string(TABLE_MARKER)),
        ("__HEADER_LABEL__", js_string(HEADER_LABEL)),
        ("__SUMMARY_MARKER__", js_string(SUMMARY_MARKER)),
        ("__MIN_COLUMNS__", MIN_COLUMNS.to_string()),
        ("__POLL_INTERVAL_MS__", poll.interval.as_millis().to_string()),
        ("__POLL_TIMEOUT_MS__", poll.timeout.as_millis().to_string()),
    ];
    fill(PAGE_SCRIPT, &subs)
}

/// Replace placeholders in one pass over `template`. Substituted text is
/// never scanned again, so saved values may contain placeholder names.
fn fill(template: &str, subs: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(at) = rest.find("__") {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];
        match subs.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push_str("__");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn navigation_script(url: &str) -> String {
    format!("window.location.href = {}; true;", js_string(url))
}
