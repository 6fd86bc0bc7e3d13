//! Error type for the upload sink.

use std::time::Duration;
use thiserror::Error;

/// An error that occurred while uploading a block record.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The record could not be serialized.
    #[error("failed to serialize block record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The request could not be sent, or no response was received.
    #[error("failed to send block record: {0}")]
    Transport(#[from] reqwest::Error),

    /// The document store answered with a non-2xx status.
    #[error("unexpected response status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The beginning of the response body.
        body: String,
    },

    /// The upload did not complete within its deadline.
    #[error("upload timed out after {0:?}")]
    Timeout(Duration),
}
