//! Error types for HTTP transport and push operations.

use thiserror::Error;

use super::ProtocolError;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The transport's own deadline elapsed before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading or releasing the response body stream failed.
    #[error("Response body error: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for a push request.
///
/// Each variant names a distinct failure kind, so callers can decide
/// whether to retry at a higher level, alert an operator, or give up.
#[derive(Debug, Error)]
pub enum PushError {
    /// The request could not be executed, or the body could not be read.
    #[error("Push transport failed: {0}")]
    Transport(#[source] HttpError),

    /// The response body was not the expected JSON document.
    #[error("Failed to decode push response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response body could not be released after a successful decode.
    #[error("Failed to release push response body: {0}")]
    Release(#[source] HttpError),

    /// The server understood the request and refused it.
    #[error("Push rejected: {0}")]
    Rejected(#[from] ProtocolError),

    /// A bounded sticky push kept receiving "not ready" until its budget ran out.
    #[error("Push still not ready after {attempts} attempts: {last_error}")]
    NotReadyExhausted {
        /// Total number of attempts made
        attempts: u32,
        /// The final "not ready" reply
        #[source]
        last_error: ProtocolError,
    },
}

impl PushError {
    /// Returns the protocol error carried by this error, if any.
    #[must_use]
    pub const fn protocol(&self) -> Option<&ProtocolError> {
        match self {
            Self::Rejected(e) | Self::NotReadyExhausted { last_error: e, .. } => Some(e),
            Self::Transport(_) | Self::Decode(_) | Self::Release(_) => None,
        }
    }

    /// Returns true if the server asked the client to try again later.
    ///
    /// Only a [`PushError::Rejected`] carrying the "push not ready" status
    /// qualifies; every other failure, including unknown status codes, is
    /// permanent.
    #[must_use]
    pub fn is_not_ready(&self) -> bool {
        self.not_ready().is_some()
    }

    /// Returns the "not ready" reply if this error is one, `None` otherwise.
    #[must_use]
    pub fn not_ready(&self) -> Option<&ProtocolError> {
        match self {
            Self::Rejected(e) if e.status().is_transient() => Some(e),
            _ => None,
        }
    }
}
