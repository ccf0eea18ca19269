//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing the approval workflow and registration rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Conflict Mapping**: Turning lost unique-index races into the same errors as the
//!   pre-checks that precede them
//!
//! Services that depend on the current date take "today" as a parameter.

pub mod attendance;
pub mod auth;
pub mod event;
pub mod organization;
pub mod qr_token;
pub mod registration;
pub mod user;

#[cfg(test)]
mod test;
