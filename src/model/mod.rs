//! Wire-level DTOs shared by every API endpoint.
//!
//! Every response body carries a `success` flag. Field names are camelCase on the wire.

pub mod api;
pub mod attendance;
pub mod dashboard;
pub mod event;
pub mod organization;
pub mod registration;
pub mod user;
