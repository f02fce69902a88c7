//! Error handling for DeskPlan
//!
//! The manipulation engine itself never fails: out-of-range input is clamped
//! and impossible requests are no-ops. Errors only arise at the edges, when
//! item types or recorded input are read from outside the process.

use thiserror::Error;

/// Main error type for DeskPlan.
#[derive(Error, Debug)]
pub enum Error {
    /// An unknown item type name was supplied.
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for DeskPlan operations
pub type Result<T> = std::result::Result<T, Error>;
