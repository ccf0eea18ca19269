//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by id and email, approval changes and the
//! organization-scoped queries used by the admin dashboard.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::user::UserRole,
    server::model::user::{CreateUserParam, User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The email must already be normalized; the unique index on `email` rejects a
    /// duplicate with a unique constraint violation.
    ///
    /// # Arguments
    /// - `param` - User fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate email or unknown organization
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            organization_id: ActiveValue::Set(param.organization_id),
            approved: ActiveValue::Set(param.approved),
            created_at: ActiveValue::Set(Utc::now()),
            approved_at: ActiveValue::Set(None),
            rejected_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query or conversion
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by email.
    ///
    /// Emails are stored lower-cased, so the lookup lower-cases and trims its input.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query or conversion
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets the users with the given ids, ordered by id. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Gets all users of an organization in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - The organization's users (empty if none)
    /// - `Err(DbErr)` - Database error during query or conversion
    pub async fn get_by_organization(&self, organization_id: i32) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::OrganizationId.eq(organization_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Gets the organization's organizers still awaiting approval, in insertion order.
    pub async fn get_pending_organizers(&self, organization_id: i32) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::OrganizationId.eq(organization_id))
            .filter(entity::user::Column::Role.eq(UserRole::Organizer.as_str()))
            .filter(entity::user::Column::Approved.eq(false))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Gets the most recently created users of an organization.
    ///
    /// Ordered by creation time descending, ties broken by id descending.
    ///
    /// # Arguments
    /// - `organization_id` - Organization to scope to
    /// - `limit` - Maximum number of users returned
    pub async fn get_recent_by_organization(
        &self,
        organization_id: i32,
        limit: u64,
    ) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::OrganizationId.eq(organization_id))
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Counts the users of an organization.
    pub async fn count_by_organization(&self, organization_id: i32) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::OrganizationId.eq(organization_id))
            .count(self.db)
            .await
    }

    /// Sets a user's approval flag and stamps the matching timestamp.
    ///
    /// Approving stamps `approved_at`, revoking stamps `rejected_at`. The other
    /// timestamp is left as it was.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `approved` - New approval state
    /// - `at` - Time of the change
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn set_approval(
        &self,
        id: i32,
        approved: bool,
        at: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.approved = ActiveValue::Set(approved);
        if approved {
            active.approved_at = ActiveValue::Set(Some(at));
        } else {
            active.rejected_at = ActiveValue::Set(Some(at));
        }

        let updated = active.update(self.db).await?;

        User::from_entity(updated).map(Some)
    }
}
