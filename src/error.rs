// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    /// Bunk targets of 0 and 100 make the attend-more formula divide by zero.
    #[error("bunk target must be between 1 and 99 percent, got {0}")]
    InvalidTarget(u32),

    #[error("bridge message is not valid JSON for a known type: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: line {line} is not a key,value pair", .path.display())]
    InvalidStore { path: PathBuf, line: usize },

    #[error("no snapshot page at {}", .0.display())]
    MissingPage(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HubError>;
