//! Error types for the session layer.

use thiserror::Error;

/// Failures surfaced by session operations.
///
/// Handler failures never escape the dispatch boundary; they are logged
/// there and the message is dropped, so one bad message cannot take the
/// node down.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The host's byte channel refused or failed a delivery.
    #[error("Message channel failure: {0}")]
    Channel(String),

    /// The configuration record could not be serialized for persistence.
    #[error("Configuration serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
