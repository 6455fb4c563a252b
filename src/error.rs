//! Error types for the shelf core.
//!
//! Change delivery is fire-and-forget, so very little in this crate can
//! fail: envelope decoding and settings persistence are the two places
//! errors surface. Both report through [`ShelfError`].

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type ShelfResult<T> = Result<T, ShelfError>;

/// Unified error type for the shelf core.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A delivered change envelope lacks a required entry.
    ///
    /// Only the keyed form has a required entry (`"key"`); the numeric
    /// entries default when absent.
    #[error("change message is missing required entry '{entry}'")]
    MissingEntry { entry: &'static str },

    /// A change envelope entry is present but has the wrong type.
    #[error("change message entry '{entry}' has an unexpected type")]
    InvalidEntry { entry: &'static str },

    /// Settings file could not be read or written.
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Settings content could not be (de)serialized.
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
