//! Registration domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::registration::{EventRegistrationDto, RegistrationDto, UserRegistrationDto},
    server::model::event::Event,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    /// Signed QR token.
    pub qr_code: String,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn into_dto(self) -> RegistrationDto {
        RegistrationDto {
            id: self.id,
            event_id: self.event_id,
            user_id: self.user_id,
            qr_code: self.qr_code,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::registration::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            qr_code: entity.qr_code,
            created_at: entity.created_at,
        }
    }
}

/// Registration joined with its registrant's contact details.
///
/// Name and email are empty strings when the registrant no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationWithUser {
    pub registration: Registration,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RegistrationWithUser {
    pub fn into_dto(self) -> EventRegistrationDto {
        EventRegistrationDto {
            registration: self.registration.into_dto(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// Registration joined with its event, which is absent when the event no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationWithEvent {
    pub registration: Registration,
    pub event: Option<Event>,
}

impl RegistrationWithEvent {
    pub fn into_dto(self) -> UserRegistrationDto {
        UserRegistrationDto {
            registration: self.registration.into_dto(),
            event: self.event.map(Event::into_dto),
        }
    }
}
