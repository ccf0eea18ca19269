use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        organization::{CreateOrganizationDto, CreatedOrganizationDto, OrganizationListDto},
    },
    server::{
        controller::extract::JsonBody, error::AppError,
        model::organization::CreateOrganizationParam, service::organization::OrganizationService,
        state::AppState,
    },
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "organization";

/// List every organization.
///
/// Public so the sign-up form can offer the organizations to join.
#[utoipa::path(
    get,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    responses(
        (status = 200, description = "All organizations", body = OrganizationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let organizations = OrganizationService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(OrganizationListDto {
            success: true,
            organizations: organizations.into_iter().map(|o| o.into_dto()).collect(),
        }),
    ))
}

/// Create an organization together with its admin account.
///
/// The response carries the generated admin credentials in plaintext. This is the only
/// time they are shown.
///
/// # Returns
/// - `200 OK` - Organization and admin credentials
/// - `400 Bad Request` - Missing name or type, or the name or admin email is taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    request_body = CreateOrganizationDto,
    responses(
        (status = 200, description = "Organization created", body = CreatedOrganizationDto),
        (status = 400, description = "Invalid or duplicate organization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateOrganizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateOrganizationParam::try_from(payload)?;

    let created = OrganizationService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::OK,
        Json(CreatedOrganizationDto {
            success: true,
            organization: created.organization.into_dto(),
            admin_credentials: created.admin_credentials.into_dto(),
        }),
    ))
}
