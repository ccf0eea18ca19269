//! User service for business logic.
//!
//! Approval management and organization-scoped user listing for admins.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists an organization's users in insertion order.
    pub async fn list_by_organization(&self, organization_id: i32) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_by_organization(organization_id)
            .await?)
    }

    /// Sets a user's approval flag.
    ///
    /// # Arguments
    /// - `user_id` - User to update
    /// - `approved` - New approval state
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_approval(&self, user_id: i32, approved: bool) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_approval(user_id, approved, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "User {} {}",
            user.id,
            if approved { "approved" } else { "rejected" }
        );

        Ok(user)
    }

    /// Flips a user's approval flag.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn toggle_status(&self, user_id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        self.set_approval(user_id, !user.approved).await
    }
}
