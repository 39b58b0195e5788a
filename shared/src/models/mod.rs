//! Data models
//!
//! Wire shapes of the blood-donation backend. Field names follow the
//! backend's snake_case schema; there is no second spelling.
//! All IDs are opaque strings (UUIDs issued by the backend).

pub mod blood_request;
pub mod blood_type;
pub mod dashboard;
pub mod donation_record;
pub mod donor;
pub mod event;
pub mod inventory;
pub mod receiver;
pub mod user;

// Re-exports
pub use blood_request::*;
pub use blood_type::*;
pub use dashboard::*;
pub use donation_record::*;
pub use donor::*;
pub use event::*;
pub use inventory::*;
pub use receiver::*;
pub use user::*;
