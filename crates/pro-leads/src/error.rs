//! Lead capture error types.

use thiserror::Error;

use crate::schema::ValidationErrors;

/// Errors returned by the persistence collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend answered with an error object.
    #[error("Insert rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The write did not finish within the configured bound.
    #[error("Insert timed out after {0}ms")]
    Timeout(u64),

    /// The record could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store is missing its connection settings.
    #[error("Store not configured: {0}")]
    NotConfigured(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Errors returned by the clipboard collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable from this platform.
    #[error("Clipboard unavailable")]
    Unavailable,

    /// The platform refused the write.
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Why a submit did not reach `Success`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Field validation failed; nothing was sent.
    #[error("Invalid submission: {0}")]
    Invalid(ValidationErrors),

    /// A submission is already in flight.
    #[error("A submission is already in progress")]
    InFlight,

    /// The form already succeeded and is waiting for its reset.
    #[error("The form is not editable until it resets")]
    NotEditable,

    /// The write failed; the form is in the `Error` state.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Why a share did not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// Share is only offered after a successful registration.
    #[error("Nothing to share before a successful registration")]
    NotSucceeded,

    /// The URL could not be copied.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
