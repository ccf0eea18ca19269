//! HTTP handlers, one module per API area.
//!
//! Handlers convert request DTOs into validated params, call the matching service and
//! wrap the result in a `{ "success": true, ... }` body. Every handler carries a
//! `#[utoipa::path]` so the router can assemble the OpenAPI document.

pub mod admin;
pub mod attendance;
pub mod auth;
pub mod event;
pub mod extract;
pub mod organization;
pub mod param;
pub mod registration;
