use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::event::EventDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    /// Opaque signed token to render as a QR code.
    pub qr_code: String,
    pub created_at: DateTime<Utc>,
}

/// Registration with the registrant's name and email, for organizer attendee lists.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrationDto {
    #[serde(flatten)]
    pub registration: RegistrationDto,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Registration with its full event, for a user's "my events" view.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationDto {
    #[serde(flatten)]
    pub registration: RegistrationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventDto>,
}

/// Request body for `POST /api/events/{event_id}/register`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForEventDto {
    #[serde(default)]
    pub user_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegistrationResponseDto {
    pub success: bool,
    pub registration: RegistrationDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EventRegistrationListDto {
    pub success: bool,
    pub registrations: Vec<EventRegistrationDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserRegistrationListDto {
    pub success: bool,
    pub registrations: Vec<UserRegistrationDto>,
}
