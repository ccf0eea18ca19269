//! Attendance data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::attendance::Attendance;

/// Repository providing database operations for attendance records.
///
/// A unique index on `(event_id, user_id)` guarantees at most one check-in per pair.
pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    /// Creates a new AttendanceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AttendanceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a check-in.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The created record
    /// - `Err(DbErr)` - Database error, including a unique violation for a repeat check-in
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        timestamp: DateTime<Utc>,
    ) -> Result<Attendance, DbErr> {
        let entity = entity::attendance::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            timestamp: ActiveValue::Set(timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Attendance::from_entity(entity))
    }

    /// Finds the check-in for an event and user pair.
    ///
    /// # Returns
    /// - `Ok(Some(Attendance))` - The user already checked in
    /// - `Ok(None)` - No check-in for the pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<Attendance>, DbErr> {
        let entity = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::EventId.eq(event_id))
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Attendance::from_entity))
    }
}
