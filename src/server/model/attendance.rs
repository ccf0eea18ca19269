//! Attendance domain models.

use chrono::{DateTime, Utc};

use crate::model::attendance::AttendeeDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub timestamp: DateTime<Utc>,
}

impl Attendance {
    pub fn from_entity(entity: entity::attendance::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            timestamp: entity.timestamp,
        }
    }
}

/// What the scanning operator sees: who checked in and when.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub name: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

impl CheckIn {
    pub fn into_dto(self) -> AttendeeDto {
        AttendeeDto {
            name: self.name,
            email: self.email,
            timestamp: self.timestamp,
        }
    }
}
