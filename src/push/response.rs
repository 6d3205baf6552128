//! Decoded push replies and the protocol error they turn into.

use serde::Deserialize;
use thiserror::Error;

use super::PushStatus;

/// Reply body returned by the push endpoint.
///
/// `code` and `error_description` are only sent on failure; they decode to
/// empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushResponse {
    /// `"success"` if the push was accepted, `"fail"` otherwise.
    pub result: String,

    /// Reason the push failed.
    #[serde(default)]
    pub code: String,

    /// Human-readable failure description.
    #[serde(default)]
    pub error_description: String,
}

impl PushResponse {
    /// Value of `result` for an accepted push.
    pub const SUCCESS: &'static str = "success";

    /// Parses a reply from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the bytes are not a JSON object
    /// with a string `result` field.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Returns true if the server accepted the push.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result == Self::SUCCESS
    }

    /// Converts the reply into an explicit outcome.
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolError`] carrying the status code and description
    /// when `result` is anything other than `"success"`.
    pub fn into_result(self) -> Result<(), ProtocolError> {
        if self.is_success() {
            return Ok(());
        }

        Err(ProtocolError::new(
            PushStatus::from_code(&self.code),
            self.error_description,
        ))
    }
}

/// A well-formed reply in which the server refused the push.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {description}")]
pub struct ProtocolError {
    status: PushStatus,
    description: String,
}

impl ProtocolError {
    /// Creates a protocol error from a status and its description.
    #[must_use]
    pub fn new(status: PushStatus, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
        }
    }

    /// Returns the status code reported by the server.
    #[must_use]
    pub const fn status(&self) -> &PushStatus {
        &self.status
    }

    /// Returns the wire value of the status code.
    #[must_use]
    pub fn code(&self) -> &str {
        self.status.as_str()
    }

    /// Returns the server's description. May be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
