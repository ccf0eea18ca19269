//! Admin dashboard aggregates.

use crate::{
    model::dashboard::DashboardStatsDto,
    server::model::{event::EventWithOrganizer, user::User},
};

/// Number of entries in each "recent" list on the dashboard.
pub const RECENT_LIMIT: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub pending_events: u64,
    pub pending_organizers: Vec<User>,
    /// Approved events dated today or later.
    pub approved_events: u64,
    pub total_users: u64,
    pub total_events: u64,
    pub recent_pending_events: Vec<EventWithOrganizer>,
    pub recent_events: Vec<EventWithOrganizer>,
    pub recent_users: Vec<User>,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            pending_events: self.pending_events,
            pending_organizers: self
                .pending_organizers
                .into_iter()
                .map(User::into_dto)
                .collect(),
            approved_events: self.approved_events,
            total_users: self.total_users,
            total_events: self.total_events,
            recent_pending_events: self
                .recent_pending_events
                .into_iter()
                .map(EventWithOrganizer::into_dto)
                .collect(),
            recent_events: self
                .recent_events
                .into_iter()
                .map(EventWithOrganizer::into_dto)
                .collect(),
            recent_users: self.recent_users.into_iter().map(User::into_dto).collect(),
        }
    }
}
