// src/config/consts.rs

// Portal
pub const PORTAL_BASE: &str = "https://adamasknowledgecity.ac.in";
pub const LOGIN_PATH: &str = "/student/login";
pub const DASHBOARD_PATH: &str = "/student/dashboard";
pub const ATTENDANCE_PATH: &str = "/student/attendance";

// Attendance table
pub const TABLE_MARKER: &str = "Total Attendance";
pub const HEADER_LABEL: &str = "Courses";
pub const SUMMARY_MARKER: &str = "Total Number";
pub const MIN_COLUMNS: usize = 5;

// Login form heuristics, shared by the Rust analysis and the page script
pub const USERNAME_SELECTOR: &str = r#"input[type="text"], input[type="email"], input[name*="user"], input[name*="email"], input[id*="user"], input[id*="email"]"#;
pub const PASSWORD_SELECTOR: &str = r#"input[type="password"]"#;

// Extraction polling
pub const POLL_INTERVAL_MS: u64 = 1_500;
pub const POLL_TIMEOUT_MS: u64 = 180_000;

// Bunk calculator
pub const BUNK_TARGETS: [u32; 2] = [75, 65];
pub const DEFAULT_TARGET: u32 = 75;

// Standing bands (percent)
pub const GOOD_FROM: u32 = 75;
pub const WARNING_FROM: u32 = 60;

// Local store
pub const STORE_DIR: &str = ".store";
pub const CREDENTIALS_FILE: &str = "credentials.csv";
pub const LOG_FILE: &str = "debug.log";
pub const KEY_USERNAME: &str = "savedUsername";
pub const KEY_PASSWORD: &str = "savedPassword";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "attendance";
