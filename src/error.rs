//! Typed errors for the feed-filtering library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while talking to external collaborators.
///
/// The scan path itself is infallible: missing markup under-matches
/// instead of failing. Errors only arise at the settings-store boundary.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Settings store operation failed
    #[error("settings store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Persisted settings value could not be decoded
    #[error("settings decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for filtering operations.
pub type Result<T> = std::result::Result<T, SiftError>;
