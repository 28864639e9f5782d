//! Recognition errors.

use crate::recognizer::RecognitionKind;
use thiserror::Error;

/// Why a recognition call produced no text.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("No endpoint configured for {0} recognition")]
    MissingEndpoint(RecognitionKind),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Service reported an error: {0}")]
    Service(String),
    #[error("Response has no '{0}' field")]
    MissingField(&'static str),
    #[error("Credential for '{0}' is not a valid header value")]
    InvalidHeader(&'static str),
}

/// Result type for recognition calls.
pub type RecognitionResult<T> = Result<T, RecognitionError>;
