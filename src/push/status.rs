//! Status codes reported by the push server.

use std::fmt;

/// Status code attached to a failed push reply.
///
/// The server's codes form an open set: known codes get their own variant,
/// anything else is preserved verbatim in [`PushStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PushStatus {
    /// `9000`: the owner UUID is invalid.
    InvalidUuid,
    /// `9001`: the push code is missing or invalid.
    InvalidCode,
    /// `9002`: the secret key is invalid.
    InvalidSecretKey,
    /// `9003`: the previous push has not completed yet.
    PushNotReady,
    /// `9004`: the server failed internally.
    InternalServerError,
    /// Any code this client does not recognize.
    Other(String),
}

impl PushStatus {
    /// Wire value of [`PushStatus::InvalidUuid`].
    pub const INVALID_UUID: &'static str = "9000";
    /// Wire value of [`PushStatus::InvalidCode`].
    pub const INVALID_CODE: &'static str = "9001";
    /// Wire value of [`PushStatus::InvalidSecretKey`].
    pub const INVALID_SECRET_KEY: &'static str = "9002";
    /// Wire value of [`PushStatus::PushNotReady`].
    pub const PUSH_NOT_READY: &'static str = "9003";
    /// Wire value of [`PushStatus::InternalServerError`].
    pub const INTERNAL_SERVER_ERROR: &'static str = "9004";

    /// Parses a wire code. Never fails: unknown codes map to [`PushStatus::Other`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            Self::INVALID_UUID => Self::InvalidUuid,
            Self::INVALID_CODE => Self::InvalidCode,
            Self::INVALID_SECRET_KEY => Self::InvalidSecretKey,
            Self::PUSH_NOT_READY => Self::PushNotReady,
            Self::INTERNAL_SERVER_ERROR => Self::InternalServerError,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidUuid => Self::INVALID_UUID,
            Self::InvalidCode => Self::INVALID_CODE,
            Self::InvalidSecretKey => Self::INVALID_SECRET_KEY,
            Self::PushNotReady => Self::PUSH_NOT_READY,
            Self::InternalServerError => Self::INTERNAL_SERVER_ERROR,
            Self::Other(code) => code.as_str(),
        }
    }

    /// Returns true if a push with this status may succeed when sent again.
    ///
    /// Only [`PushStatus::PushNotReady`] is transient.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::PushNotReady)
    }
}

impl fmt::Display for PushStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PushStatus {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_variants() {
        assert_eq!(PushStatus::from_code("9000"), PushStatus::InvalidUuid);
        assert_eq!(PushStatus::from_code("9001"), PushStatus::InvalidCode);
        assert_eq!(PushStatus::from_code("9002"), PushStatus::InvalidSecretKey);
        assert_eq!(PushStatus::from_code("9003"), PushStatus::PushNotReady);
        assert_eq!(
            PushStatus::from_code("9004"),
            PushStatus::InternalServerError
        );
    }

    #[test]
    fn unknown_code_is_preserved() {
        let status = PushStatus::from_code("9999");

        assert_eq!(status, PushStatus::Other("9999".to_string()));
        assert_eq!(status.as_str(), "9999");
    }

    #[test]
    fn empty_code_is_other() {
        assert_eq!(PushStatus::from_code(""), PushStatus::Other(String::new()));
    }

    #[test]
    fn as_str_returns_wire_value() {
        for code in ["9000", "9001", "9002", "9003", "9004"] {
            assert_eq!(PushStatus::from_code(code).as_str(), code);
        }
    }

    #[test]
    fn only_not_ready_is_transient() {
        assert!(PushStatus::PushNotReady.is_transient());

        assert!(!PushStatus::InvalidUuid.is_transient());
        assert!(!PushStatus::InvalidCode.is_transient());
        assert!(!PushStatus::InvalidSecretKey.is_transient());
        assert!(!PushStatus::InternalServerError.is_transient());
        assert!(!PushStatus::Other("9005".to_string()).is_transient());
    }

    #[test]
    fn display_writes_code() {
        assert_eq!(PushStatus::InvalidSecretKey.to_string(), "9002");
        assert_eq!(PushStatus::Other("x".to_string()).to_string(), "x");
    }
}
