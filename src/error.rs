//! Error types for upload operations.

use thiserror::Error;

/// Why an upload did not produce a response body.
///
/// The render layer never shows these; they are kept in state and logged.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request never produced a response (refused, reset, DNS...).
    #[error("upload request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("upload endpoint returned status {status}")]
    Status { status: u16 },

    /// The response body was not valid JSON.
    #[error("upload response was not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UploadError {
    /// HTTP status, when the endpoint got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            UploadError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
