//! Registration factory for creating test registration entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a registration with a placeholder QR code.
///
/// The QR code is not a verifiable token; tests that scan codes should issue a real
/// token through the server's token service.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event being registered for
/// - `user_id` - Registrant
///
/// # Returns
/// - `Ok(entity::registration::Model)` - Created registration entity
/// - `Err(DbErr)` - Database error during insert, including a duplicate pair
pub async fn create_registration(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::registration::Model, DbErr> {
    entity::registration::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        qr_code: ActiveValue::Set(format!("qr-{}-{}", event_id, user_id)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
