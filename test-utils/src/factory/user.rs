//! User factory for creating test user entities.
//!
//! Users default to an approved student with a password hash that verifies against
//! nothing. Tests that log in should hash a password and pass it via `password_hash`.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let organizer = UserFactory::new(&db, organization.id)
///     .first_name("Jo")
///     .last_name("Lee")
///     .role("organizer")
///     .approved(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: i32,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: String,
    approved: bool,
    created_at: DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"User"`, last_name: `"{id}"`
    /// - email: `"user{id}@example.com"`
    /// - role: `"student"`, approved: `true`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `organization_id` - Organization the user belongs to
    pub fn new(db: &'a DatabaseConnection, organization_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            organization_id,
            first_name: "User".to_string(),
            last_name: id.to_string(),
            email: format!("user{}@example.com", id),
            password_hash: "!".to_string(),
            role: "student".to_string(),
            approved: true,
            created_at: Utc::now(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email. Stored as given, so pass it lower-cased to mirror the service.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role (`admin`, `organizer`, `student` or `employee`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    /// Sets the creation timestamp, for tests that depend on recency ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            organization_id: ActiveValue::Set(self.organization_id),
            approved: ActiveValue::Set(self.approved),
            created_at: ActiveValue::Set(self.created_at),
            approved_at: ActiveValue::Set(None),
            rejected_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved student with default values.
pub async fn create_user(
    db: &DatabaseConnection,
    organization_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, organization_id).build().await
}
