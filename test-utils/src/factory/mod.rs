//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and the
//! `helpers` module creates whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let organization = factory::create_organization(&db).await?;
//!     let organizer = factory::create_user(&db, organization.id).await?;
//!     let event = factory::create_event(&db, organizer.id, organization.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db, organizer.id, organization.id)
//!     .name("Career Fair")
//!     .status("approved")
//!     .date(chrono::Utc::now().date_naive())
//!     .build()
//!     .await?;
//! ```

pub mod attendance;
pub mod event;
pub mod helpers;
pub mod organization;
pub mod registration;
pub mod user;

pub use attendance::create_attendance;
pub use event::create_event;
pub use organization::create_organization;
pub use registration::create_registration;
pub use user::create_user;
