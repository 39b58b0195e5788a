//! Backend operations
//!
//! One method per backend action, grouped by resource. Each is a thin
//! parameter-shaping call into [`ApiClient::request`](crate::ApiClient::request).

mod auth;
mod dashboard;
mod donors;
mod events;
mod inventory;
mod receivers;
mod records;
mod requests;
