//! Event service for business logic.
//!
//! This module provides the `EventService`, which owns the event approval workflow:
//! creation in the pending state, approve/reject transitions, the student-facing list of
//! upcoming approved events and the admin dashboard aggregates.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::event::EventStatus,
    server::{
        data::{
            event::EventRepository, organization::OrganizationRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            dashboard::{DashboardStats, RECENT_LIMIT},
            event::{CreateEventParam, Event, EventFilter, EventWithOrganizer, UNKNOWN_ORGANIZER},
        },
    },
};

/// Service providing business logic for events.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event awaiting admin approval.
    ///
    /// # Arguments
    /// - `param` - Validated event fields
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event, status pending, no registrations
    /// - `Err(AppError::BadRequest)` - Organizer or organization does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(param.organizer_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Organizer {} not found",
                param.organizer_id
            )));
        }

        if OrganizationRepository::new(self.db)
            .find_by_id(param.organization_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Organization {} not found",
                param.organization_id
            )));
        }

        let event = EventRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Event {} created by organizer {}, awaiting approval",
            event.id,
            event.organizer_id
        );

        Ok(event)
    }

    /// Lists events matching the filter, in insertion order.
    pub async fn list(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_filtered(filter).await?)
    }

    /// Lists an organization's approved events dated `today` or later, with organizer names.
    ///
    /// # Arguments
    /// - `organization_id` - Organization to scope to
    /// - `today` - Current calendar date; events on this date are included
    pub async fn list_upcoming_approved(
        &self,
        organization_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<EventWithOrganizer>, AppError> {
        let events = EventRepository::new(self.db)
            .get_upcoming_approved(organization_id, today)
            .await?;

        self.with_organizer_names(events).await
    }

    /// Approves an event. Allowed from any status.
    ///
    /// # Returns
    /// - `Ok(Event)` - The approved event
    /// - `Err(AppError::NotFound)` - No such event
    pub async fn approve(&self, event_id: i32) -> Result<Event, AppError> {
        self.transition(event_id, EventStatus::Approved).await
    }

    /// Rejects an event. Allowed from any status, including approved.
    ///
    /// # Returns
    /// - `Ok(Event)` - The rejected event
    /// - `Err(AppError::NotFound)` - No such event
    pub async fn reject(&self, event_id: i32) -> Result<Event, AppError> {
        self.transition(event_id, EventStatus::Rejected).await
    }

    /// Builds the admin dashboard for an organization.
    ///
    /// Every figure is scoped to the organization. "Recent" lists hold at most five
    /// entries, newest first.
    ///
    /// # Arguments
    /// - `organization_id` - Organization to aggregate
    /// - `today` - Current calendar date, for the upcoming approved count
    ///
    /// # Returns
    /// - `Ok(DashboardStats)` - Counts and recent activity
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn dashboard_stats(
        &self,
        organization_id: i32,
        today: NaiveDate,
    ) -> Result<DashboardStats, AppError> {
        let event_repo = EventRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let pending_events = event_repo
            .count_by_organization(organization_id, Some(EventStatus::Pending))
            .await?;
        let approved_events = event_repo
            .count_upcoming_approved(organization_id, today)
            .await?;
        let total_events = event_repo
            .count_by_organization(organization_id, None)
            .await?;

        let recent_pending_events = event_repo
            .get_recent_by_organization(organization_id, Some(EventStatus::Pending), RECENT_LIMIT)
            .await?;
        let recent_events = event_repo
            .get_recent_by_organization(organization_id, None, RECENT_LIMIT)
            .await?;

        Ok(DashboardStats {
            pending_events,
            pending_organizers: user_repo.get_pending_organizers(organization_id).await?,
            approved_events,
            total_users: user_repo.count_by_organization(organization_id).await?,
            total_events,
            recent_pending_events: self.with_organizer_names(recent_pending_events).await?,
            recent_events: self.with_organizer_names(recent_events).await?,
            recent_users: user_repo
                .get_recent_by_organization(organization_id, RECENT_LIMIT)
                .await?,
        })
    }

    async fn transition(&self, event_id: i32, status: EventStatus) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .set_status(event_id, status, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        tracing::info!("Event {} is now {}", event.id, event.status);

        Ok(event)
    }

    /// Resolves each event's organizer first name, "Unknown" when the organizer is gone.
    async fn with_organizer_names(
        &self,
        events: Vec<Event>,
    ) -> Result<Vec<EventWithOrganizer>, AppError> {
        let mut organizer_ids: Vec<i32> = events.iter().map(|e| e.organizer_id).collect();
        organizer_ids.sort_unstable();
        organizer_ids.dedup();

        let names: HashMap<i32, String> = UserRepository::new(self.db)
            .find_by_ids(organizer_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.first_name))
            .collect();

        Ok(events
            .into_iter()
            .map(|event| {
                let organizer_name = names
                    .get(&event.organizer_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_ORGANIZER.to_string());
                EventWithOrganizer {
                    event,
                    organizer_name,
                }
            })
            .collect())
    }
}
