//! Client-related types
//!
//! Request/response bodies of the auth endpoints plus the small envelopes
//! other endpoints return.

use serde::{Deserialize, Serialize};

use crate::models::UserRole;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Registration request
///
/// `role` is the backend code (see [`UserRole::backend_code`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

impl RegisterRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: role.backend_code().to_string(),
        }
    }
}

// =============================================================================
// Envelopes
// =============================================================================

/// `{"message": "..."}` returned by delete endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_backend_code() {
        let req = RegisterRequest::new("b@x.com", "secret1", UserRole::Receiver);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["role"], "recv");
        assert_eq!(body["email"], "b@x.com");
    }
}
