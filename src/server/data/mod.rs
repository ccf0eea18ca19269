//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! collection in the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separate from business logic. Every read
//! goes to the database; nothing is cached between calls.

pub mod attendance;
pub mod event;
pub mod organization;
pub mod registration;
pub mod user;


use sea_orm::{DbErr, SqlErr};

/// Whether a database error is a unique index violation.
///
/// Services use this to report a lost check-then-insert race the same way as the
/// pre-check that should have caught it.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
