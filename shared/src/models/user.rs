//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
///
/// The backend stores receivers as `recv`; that alias is accepted on the way
/// in and never produced on the way out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Donor,
    #[serde(alias = "recv")]
    Receiver,
}

impl UserRole {
    /// UI-facing name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Donor => "donor",
            Self::Receiver => "receiver",
        }
    }

    /// Code the backend expects when creating an account
    pub fn backend_code(&self) -> &'static str {
        match self {
            Self::Receiver => "recv",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "donor" => Ok(Self::Donor),
            "receiver" | "recv" => Ok(Self::Receiver),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Authenticated account (`/auth/me`, `/auth/register`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Never returned by the backend after auth; never written to disk
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub role: UserRole,
    #[serde(with = "crate::util::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        with = "crate::util::option_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}
