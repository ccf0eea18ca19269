//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an organization with an organizer user in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((organization, organizer))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_organization_with_organizer(
    db: &DatabaseConnection,
) -> Result<(entity::organization::Model, entity::user::Model), DbErr> {
    let organization = crate::factory::organization::create_organization(db).await?;
    let organizer = crate::factory::user::UserFactory::new(db, organization.id)
        .role("organizer")
        .approved(true)
        .build()
        .await?;

    Ok((organization, organizer))
}

/// Creates a complete event hierarchy.
///
/// This is a convenience method that creates:
/// 1. Organization
/// 2. Organizer user (approved)
/// 3. Event (pending, dated in the future)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((organization, organizer, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::organization::Model,
        entity::user::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let (organization, organizer) = create_organization_with_organizer(db).await?;
    let event = crate::factory::event::create_event(db, organizer.id, organization.id).await?;

    Ok((organization, organizer, event))
}

/// Creates an event plus a student who is registered for it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((event, student, registration))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registration_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::event::Model,
        entity::user::Model,
        entity::registration::Model,
    ),
    DbErr,
> {
    let (organization, _organizer, event) = create_event_with_dependencies(db).await?;
    let student = crate::factory::user::create_user(db, organization.id).await?;
    let registration =
        crate::factory::registration::create_registration(db, event.id, student.id).await?;

    Ok((event, student, registration))
}
