//! Blood-donation client - HTTP client for the coordination backend
//!
//! Provides the authenticated API access layer, durable session storage
//! and the session cache used by the donor, receiver and admin front ends.

mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;

pub use config::ClientConfig;
pub use context::AppContext;
pub use error::{ApiError, ApiResult, SessionError, SessionResult, StorageError, StorageResult};
pub use http::{ApiClient, RequestOptions};
pub use session::{SessionCache, SessionState};
pub use storage::{CURRENT_USER_KEY, FileStore, MemoryStore, SessionStore, TOKEN_KEY};

// Re-export shared types for convenience
pub use shared::client::{MessageResponse, TokenResponse};
pub use shared::models;
pub use shared::models::{User, UserRole};
