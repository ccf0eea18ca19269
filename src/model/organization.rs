use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/organizations`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub org_type: Option<String>,
}

/// Credentials of the admin account generated alongside a new organization.
///
/// Returned exactly once, in the creation response.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AdminCredentialsDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct OrganizationListDto {
    pub success: bool,
    pub organizations: Vec<OrganizationDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrganizationDto {
    pub success: bool,
    pub organization: OrganizationDto,
    pub admin_credentials: AdminCredentialsDto,
}
