/// Error types for talking to the ipaas backend
use thiserror::Error;

use super::envelope::SESSION_EXPIRED_CODE;

/// Errors that can occur while calling the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The access token is missing or expired (envelope code 498)
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// A field was rejected, either locally or by the backend
    #[error("{0}")]
    Validation(String),

    /// Any other error envelope returned by the backend
    #[error("{message}")]
    Rejected {
        /// Code carried by the envelope, if any
        code: Option<i64>,
        /// Message shown to the user
        message: String,
    },

    /// The refresh endpoint itself returned an error
    #[error("Could not refresh the session: {0}")]
    RefreshFailed(String),

    /// Network-level failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a response envelope
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// `data` did not have the shape the endpoint promises
    #[error("Failed to decode response data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The credential file could not be read or written
    #[error("Credential store error: {0}")]
    Credentials(#[from] std::io::Error),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired(_))
    }

    /// Envelope code behind this error, when the backend supplied one.
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiError::SessionExpired(_) => Some(SESSION_EXPIRED_CODE),
            ApiError::Rejected { code, .. } => *code,
            _ => None,
        }
    }
}
