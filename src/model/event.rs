use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::registration::RegistrationDto;

/// Approval state of an event.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("Unknown event status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
    /// Registrations for this event, joined at read time.
    pub registrations: Vec<RegistrationDto>,
}

/// Event enriched with the organizer's first name ("Unknown" when the organizer is gone).
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventWithOrganizerDto {
    #[serde(flatten)]
    pub event: EventDto,
    pub organizer_name: String,
}

/// Request body for `POST /api/events`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    #[serde(default)]
    pub organizer_id: Option<i32>,
    #[serde(default)]
    pub organization_id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is used.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EventResponseDto {
    pub success: bool,
    pub event: EventDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EventListDto {
    pub success: bool,
    pub events: Vec<EventDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpcomingEventListDto {
    pub success: bool,
    pub events: Vec<EventWithOrganizerDto>,
}
