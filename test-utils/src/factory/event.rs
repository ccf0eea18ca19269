//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, organizer.id, organization.id)
///     .status("approved")
///     .date(today)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    organizer_id: i32,
    organization_id: i32,
    name: String,
    date: NaiveDate,
    venue: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"`
    /// - date: seven days from now
    /// - venue: `"Main Hall"`
    /// - status: `"pending"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, organizer_id: i32, organization_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            organizer_id,
            organization_id,
            name: format!("Event {}", id),
            date: (Utc::now() + Duration::days(7)).date_naive(),
            venue: "Main Hall".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Sets the status (`pending`, `approved` or `rejected`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            organizer_id: ActiveValue::Set(self.organizer_id),
            organization_id: ActiveValue::Set(self.organization_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(None),
            venue: ActiveValue::Set(self.venue),
            category: ActiveValue::Set(None),
            capacity: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            approved_at: ActiveValue::Set(None),
            rejected_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    organizer_id: i32,
    organization_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, organizer_id, organization_id)
        .build()
        .await
}
