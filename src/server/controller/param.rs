use serde::Deserialize;

use crate::server::{error::AppError, model::event::EventFilter};

/// `?organizationId=` on endpoints that are scoped to one organization.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationParam {
    #[serde(default)]
    pub organization_id: Option<i32>,
}

impl OrganizationParam {
    /// Returns the organization id, or a 400 when it was omitted.
    pub fn require(self) -> Result<i32, AppError> {
        self.organization_id
            .ok_or_else(|| AppError::BadRequest("Organization ID is required".to_string()))
    }
}

/// Optional filters for listing events.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventFilterParam {
    #[serde(default)]
    pub organizer_id: Option<i32>,
    #[serde(default)]
    pub organization_id: Option<i32>,
}

impl From<EventFilterParam> for EventFilter {
    fn from(param: EventFilterParam) -> Self {
        Self {
            organizer_id: param.organizer_id,
            organization_id: param.organization_id,
        }
    }
}
