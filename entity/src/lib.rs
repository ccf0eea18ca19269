//! SeaORM entities, one per persisted collection.

pub mod attendance;
pub mod event;
pub mod organization;
pub mod prelude;
pub mod registration;
pub mod user;
