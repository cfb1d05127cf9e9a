// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

#[doc(hidden)]
pub use ::log as log_facade;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod bridge;
pub mod csv;
pub mod derive;
pub mod file;
pub mod gui;
pub mod inject;
pub mod model;
pub mod poll;
pub mod progress;
pub mod runner;
pub mod session;
pub mod store;
pub mod surface;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{HubError, Result};
