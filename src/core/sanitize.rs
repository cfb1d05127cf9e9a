// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Course labels arrive with real newlines and sometimes with a literal
/// backslash-n left over from double-escaped JSON. Both become spaces.
pub fn normalize_course(s: &str) -> String {
    normalize_ws(&s.replace("\\n", " "))
}

/// Drop the first `%` and trim, e.g. `" 90 %"` -> `"90"`.
pub fn strip_percent(s: &str) -> String {
    s.replacen('%', "", 1).trim().to_string()
}

/// Leading-digit integer parse: `"20"`, `" 20 "`, `"20 classes"` are all 20.
/// Anything without leading digits is 0. Negative values clamp to 0 and
/// oversized values saturate.
pub fn parse_count(s: &str) -> u32 {
    let t = s.trim_start();
    let t = t.strip_prefix('+').unwrap_or(t);
    if t.starts_with('-') {
        return 0;
    }
    let mut value: u64 = 0;
    for ch in t.chars() {
        match ch.to_digit(10) {
            Some(d) => value = (value * 10 + d as u64).min(u32::MAX as u64),
            None => break,
        }
    }
    value as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_names_lose_newlines_and_runs() {
        assert_eq!(normalize_course("Intro\nto\n  CS"), "Intro to CS");
        assert_eq!(normalize_course("Data\\nStructures"), "Data Structures");
        assert_eq!(normalize_course("  \t Math \r\n"), "Math");
    }

    #[test]
    fn percent_sign_is_stripped_once() {
        assert_eq!(strip_percent("90%"), "90");
        assert_eq!(strip_percent(" 87.5 % "), "87.5");
        assert_eq!(strip_percent("100%%"), "100%");
    }

    #[test]
    fn counts_parse_like_parse_int() {
        assert_eq!(parse_count("20"), 20);
        assert_eq!(parse_count(" 18 "), 18);
        assert_eq!(parse_count("12 of 14"), 12);
        assert_eq!(parse_count("+7"), 7);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("N/A"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("99999999999"), u32::MAX);
    }
}
