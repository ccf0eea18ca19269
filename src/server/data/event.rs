//! Event data repository for database operations.
//!
//! This module provides the `EventRepository` for creating, filtering and transitioning
//! events. An event's registrations are joined from the registration table on every read
//! rather than stored on the event row.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::event::EventStatus,
    server::model::{
        event::{CreateEventParam, Event, EventFilter},
        registration::Registration,
    },
};

/// Repository providing database operations for events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event with status pending.
    ///
    /// # Arguments
    /// - `param` - Validated event fields
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with no registrations
    /// - `Err(DbErr)` - Database error, including an unknown organizer or organization
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            organizer_id: ActiveValue::Set(param.organizer_id),
            organization_id: ActiveValue::Set(param.organization_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            venue: ActiveValue::Set(param.venue),
            category: ActiveValue::Set(param.category),
            capacity: ActiveValue::Set(param.capacity),
            status: ActiveValue::Set(EventStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            approved_at: ActiveValue::Set(None),
            rejected_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity, Vec::new())
    }

    /// Finds an event by id, with its registrations.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found
    /// - `Ok(None)` - No event with that id
    /// - `Err(DbErr)` - Database error during query or conversion
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut events = self.with_registrations(vec![entity]).await?;

        Ok(events.pop())
    }

    /// Gets the events with the given ids, ordered by id. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Event>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(ids))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.with_registrations(entities).await
    }

    /// Gets events matching every filter that is set, in insertion order.
    ///
    /// An empty filter returns all events.
    ///
    /// # Arguments
    /// - `filter` - Optional organizer and organization constraints
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Matching events with registrations
    /// - `Err(DbErr)` - Database error during query or conversion
    pub async fn get_filtered(&self, filter: EventFilter) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(organizer_id) = filter.organizer_id {
            query = query.filter(entity::event::Column::OrganizerId.eq(organizer_id));
        }
        if let Some(organization_id) = filter.organization_id {
            query = query.filter(entity::event::Column::OrganizationId.eq(organization_id));
        }

        let entities = query
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.with_registrations(entities).await
    }

    /// Gets approved events of an organization dated on or after `from`.
    ///
    /// Ordered by date ascending, then id.
    ///
    /// # Arguments
    /// - `organization_id` - Organization to scope to
    /// - `from` - First calendar date included
    pub async fn get_upcoming_approved(
        &self,
        organization_id: i32,
        from: NaiveDate,
    ) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizationId.eq(organization_id))
            .filter(entity::event::Column::Status.eq(EventStatus::Approved.as_str()))
            .filter(entity::event::Column::Date.gte(from))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.with_registrations(entities).await
    }

    /// Gets the most recently created events of an organization.
    ///
    /// Ordered by creation time descending, ties broken by id descending.
    ///
    /// # Arguments
    /// - `organization_id` - Organization to scope to
    /// - `status` - Only events in this status when set
    /// - `limit` - Maximum number of events returned
    pub async fn get_recent_by_organization(
        &self,
        organization_id: i32,
        status: Option<EventStatus>,
        limit: u64,
    ) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizationId.eq(organization_id));

        if let Some(status) = status {
            query = query.filter(entity::event::Column::Status.eq(status.as_str()));
        }

        let entities = query
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_registrations(entities).await
    }

    /// Counts an organization's events, optionally restricted to one status.
    pub async fn count_by_organization(
        &self,
        organization_id: i32,
        status: Option<EventStatus>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizationId.eq(organization_id));

        if let Some(status) = status {
            query = query.filter(entity::event::Column::Status.eq(status.as_str()));
        }

        query.count(self.db).await
    }

    /// Counts an organization's approved events dated on or after `from`.
    pub async fn count_upcoming_approved(
        &self,
        organization_id: i32,
        from: NaiveDate,
    ) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizationId.eq(organization_id))
            .filter(entity::event::Column::Status.eq(EventStatus::Approved.as_str()))
            .filter(entity::event::Column::Date.gte(from))
            .count(self.db)
            .await
    }

    /// Moves an event to approved or rejected and stamps the matching timestamp.
    ///
    /// Any current status may transition; only `Approved` and `Rejected` are valid targets.
    ///
    /// # Arguments
    /// - `id` - Event id
    /// - `status` - Target status
    /// - `at` - Time of the transition
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The updated event with registrations
    /// - `Ok(None)` - No event with that id
    /// - `Err(DbErr::Custom)` - `Pending` was requested as a target
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn set_status(
        &self,
        id: i32,
        status: EventStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Event>, DbErr> {
        if status == EventStatus::Pending {
            return Err(DbErr::Custom(format!(
                "Event {} cannot be moved back to pending",
                id
            )));
        }

        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        match status {
            EventStatus::Approved => active.approved_at = ActiveValue::Set(Some(at)),
            EventStatus::Rejected => active.rejected_at = ActiveValue::Set(Some(at)),
            EventStatus::Pending => {}
        }

        let updated = active.update(self.db).await?;
        let mut events = self.with_registrations(vec![updated]).await?;

        Ok(events.pop())
    }

    /// Joins registrations onto event rows, keeping the rows' order.
    ///
    /// Registrations are attached in insertion order.
    async fn with_registrations(
        &self,
        entities: Vec<entity::event::Model>,
    ) -> Result<Vec<Event>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let registrations = entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.is_in(event_ids))
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?;

        let mut by_event: HashMap<i32, Vec<Registration>> = HashMap::new();
        for registration in registrations {
            by_event
                .entry(registration.event_id)
                .or_default()
                .push(Registration::from_entity(registration));
        }

        entities
            .into_iter()
            .map(|entity| {
                let registrations = by_event.remove(&entity.id).unwrap_or_default();
                Event::from_entity(entity, registrations)
            })
            .collect()
    }
}
