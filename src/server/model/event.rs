//! Event domain models and parameters.
//!
//! An event's registrations are not stored with the event; repositories join them from
//! the registration collection whenever an event is read.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::event::{CreateEventDto, EventDto, EventStatus, EventWithOrganizerDto},
    server::{
        error::AppError,
        model::registration::Registration,
        util::{date::parse_event_date, input::non_blank},
    },
};

/// Name shown when an event's organizer cannot be resolved.
pub const UNKNOWN_ORGANIZER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub organizer_id: i32,
    pub organization_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub venue: String,
    pub category: Option<String>,
    pub capacity: Option<i32>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    /// Registrations in insertion order.
    pub registrations: Vec<Registration>,
}

impl Event {
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            organizer_id: self.organizer_id,
            organization_id: self.organization_id,
            name: self.name,
            description: self.description,
            date: self.date,
            time: self.time,
            venue: self.venue,
            category: self.category,
            capacity: self.capacity,
            status: self.status,
            created_at: self.created_at,
            approved_at: self.approved_at,
            rejected_at: self.rejected_at,
            registrations: self
                .registrations
                .into_iter()
                .map(Registration::into_dto)
                .collect(),
        }
    }

    /// Converts an entity model plus its joined registrations to an event domain model.
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted event
    /// - `Err(DbErr::Custom)` - The stored status is not a known status
    pub fn from_entity(
        entity: entity::event::Model,
        registrations: Vec<Registration>,
    ) -> Result<Self, DbErr> {
        let status = entity.status.parse::<EventStatus>().map_err(|e| {
            DbErr::Custom(format!("Failed to parse status of event {}: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            organizer_id: entity.organizer_id,
            organization_id: entity.organization_id,
            name: entity.name,
            description: entity.description,
            date: entity.date,
            time: entity.time,
            venue: entity.venue,
            category: entity.category,
            capacity: entity.capacity,
            status,
            created_at: entity.created_at,
            approved_at: entity.approved_at,
            rejected_at: entity.rejected_at,
            registrations,
        })
    }
}

/// Event with its organizer's first name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWithOrganizer {
    pub event: Event,
    pub organizer_name: String,
}

impl EventWithOrganizer {
    pub fn into_dto(self) -> EventWithOrganizerDto {
        EventWithOrganizerDto {
            event: self.event.into_dto(),
            organizer_name: self.organizer_name,
        }
    }
}

/// Validated input for creating an event. Status is always forced to pending.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub organizer_id: i32,
    pub organization_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub venue: String,
    pub category: Option<String>,
    pub capacity: Option<i32>,
}

impl TryFrom<CreateEventDto> for CreateEventParam {
    type Error = AppError;

    /// Validates an event creation request.
    ///
    /// Blank optional text fields are dropped.
    ///
    /// # Returns
    /// - `Ok(CreateEventParam)` - Required fields present and well-formed
    /// - `Err(AppError::BadRequest)` - Missing organizer, organization, name, date or venue;
    ///   an unparseable date; or a capacity below 1
    fn try_from(dto: CreateEventDto) -> Result<Self, Self::Error> {
        let (Some(organizer_id), Some(organization_id), Some(name), Some(date), Some(venue)) = (
            dto.organizer_id,
            dto.organization_id,
            non_blank(dto.name),
            non_blank(dto.date),
            non_blank(dto.venue),
        ) else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        let date = parse_event_date(&date)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid event date '{}'", date)))?;

        if let Some(capacity) = dto.capacity {
            if capacity < 1 {
                return Err(AppError::BadRequest(
                    "Capacity must be at least 1".to_string(),
                ));
            }
        }

        Ok(Self {
            organizer_id,
            organization_id,
            name,
            description: non_blank(dto.description),
            date,
            time: non_blank(dto.time),
            venue,
            category: non_blank(dto.category),
            capacity: dto.capacity,
        })
    }
}

/// Filter for listing events. Every field that is set must match.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub organizer_id: Option<i32>,
    pub organization_id: Option<i32>,
}
