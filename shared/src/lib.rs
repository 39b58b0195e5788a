//! Shared types for the blood-donation client
//!
//! Data models and auth DTOs exchanged with the backend REST API.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
pub use models::{User, UserRole};
