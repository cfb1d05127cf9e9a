// src/specs/mod.rs
//! # Page readers
//!
//! Page-specific readers for the portal. Each one knows *where the ground
//! truth lives in the HTML* of one page and how to pull it out tolerantly.
//!
//! ## What lives here
//! - **Pure HTML parsing** of rendered pages (`scraper` DOM + CSS selectors).
//! - **Selection precedence** (first marked table, `tbody` rows before all rows).
//! - **Row filtering** that tells data rows from header/summary rows.
//!
//! ## What does **not** live here
//! - Polling, timeouts, navigation: `poll` and `session`.
//! - Persistence: `store`.
//! - Arithmetic and presentation: `derive`, `gui`, `cli`.
//!
//! ## Typical call chain
//! ```text
//! surface page load → poll::poll_until_ready → specs::attendance::extract
//!                                           ↘ BridgeMessage::AttendanceData
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML fixtures (see `tests/`).
pub mod attendance;
pub mod login_form;
