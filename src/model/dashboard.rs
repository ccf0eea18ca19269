use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{event::EventWithOrganizerDto, user::UserDto};

/// Admin dashboard aggregates for one organization.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub pending_events: u64,
    pub pending_organizers: Vec<UserDto>,
    /// Approved events dated today or later.
    pub approved_events: u64,
    pub total_users: u64,
    pub total_events: u64,
    pub recent_pending_events: Vec<EventWithOrganizerDto>,
    pub recent_events: Vec<EventWithOrganizerDto>,
    pub recent_users: Vec<UserDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DashboardStatsResponseDto {
    pub success: bool,
    pub stats: DashboardStatsDto,
}
