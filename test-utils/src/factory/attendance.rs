//! Attendance factory for creating test attendance entities.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Creates an attendance record stamped now.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Attended event
/// - `user_id` - Attendee
///
/// # Returns
/// - `Ok(entity::attendance::Model)` - Created attendance entity
/// - `Err(DbErr)` - Database error during insert, including a duplicate pair
pub async fn create_attendance(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    entity::attendance::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        timestamp: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Counts the attendance records stored for an event.
pub async fn count_for_event(db: &DatabaseConnection, event_id: i32) -> Result<u64, DbErr> {
    entity::prelude::Attendance::find()
        .filter(entity::attendance::Column::EventId.eq(event_id))
        .count(db)
        .await
}
