//! Registration data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::registration::Registration;

/// Repository providing database operations for event registrations.
///
/// A unique index on `(event_id, user_id)` guarantees at most one registration per pair.
pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new RegistrationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegistrationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a registration.
    ///
    /// # Arguments
    /// - `event_id` - Event registered for
    /// - `user_id` - Registrant
    /// - `qr_code` - Signed token issued for the pair
    /// - `created_at` - Registration time, also embedded in the token
    ///
    /// # Returns
    /// - `Ok(Registration)` - The created registration
    /// - `Err(DbErr)` - Database error, including a unique violation for a duplicate pair
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        qr_code: String,
        created_at: DateTime<Utc>,
    ) -> Result<Registration, DbErr> {
        let entity = entity::registration::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            qr_code: ActiveValue::Set(qr_code),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Registration::from_entity(entity))
    }

    /// Finds the registration for an event and user pair.
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - The user is registered for the event
    /// - `Ok(None)` - No registration for the pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<Registration>, DbErr> {
        let entity = entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .filter(entity::registration::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Registration::from_entity))
    }

    /// Gets an event's registrations in insertion order.
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<Registration>, DbErr> {
        let entities = entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Registration::from_entity).collect())
    }

    /// Gets a user's registrations in insertion order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Registration>, DbErr> {
        let entities = entity::prelude::Registration::find()
            .filter(entity::registration::Column::UserId.eq(user_id))
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Registration::from_entity).collect())
    }
}
