//! Client error types

use thiserror::Error;

/// Message shown when the backend rejects the credential
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required. Please log in again.";

/// Message used when login succeeded but `/auth/me` did not
pub const USER_INFO_FAILED_MESSAGE: &str = "Failed to get user information";

/// API access layer error
///
/// `Display` is the single user-facing message for every variant.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401, or the backend said "Not authenticated"; local credential purged
    #[error("{}", AUTH_REQUIRED_MESSAGE)]
    AuthenticationRequired,

    /// Any other non-success status
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Transport failure (connection refused, DNS, timeout)
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthenticationRequired)
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationRequired => Some(401),
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

/// Session cache error
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Login returned a credential but the identity lookup failed
    #[error("{}", USER_INFO_FAILED_MESSAGE)]
    UserInfoUnavailable,
}

/// Durable storage error
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::AuthenticationRequired.to_string(),
            "Authentication required. Please log in again."
        );
        let err = ApiError::RequestFailed {
            status: 400,
            message: "Email already registered".into(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_auth_required());
    }

    #[test]
    fn test_session_error_is_transparent() {
        let err = SessionError::from(ApiError::AuthenticationRequired);
        assert_eq!(err.to_string(), AUTH_REQUIRED_MESSAGE);
        assert_eq!(
            SessionError::UserInfoUnavailable.to_string(),
            "Failed to get user information"
        );
    }
}
