//! Organization admin endpoints: dashboard, user approval and event moderation.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dashboard::DashboardStatsResponseDto,
        event::EventResponseDto,
        user::{UserListDto, UserResponseDto},
    },
    server::{
        controller::{
            extract::{PathParam, QueryParams},
            param::OrganizationParam,
        },
        error::AppError,
        model::{event::Event, user::User},
        service::{event::EventService, user::UserService},
        state::AppState,
        util::date::today,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

fn user_response(user: User) -> Json<UserResponseDto> {
    Json(UserResponseDto {
        success: true,
        user: user.into_dto(),
    })
}

fn event_response(event: Event) -> Json<EventResponseDto> {
    Json(EventResponseDto {
        success: true,
        event: event.into_dto(),
    })
}

/// Get dashboard figures for an organization.
///
/// # Returns
/// - `200 OK` - Counts and recent activity
/// - `400 Bad Request` - `organizationId` missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/dashboard-stats",
    tag = ADMIN_TAG,
    params(
        ("organizationId" = i32, Query, description = "Organization to aggregate")
    ),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsResponseDto),
        (status = 400, description = "Organization ID missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    QueryParams(param): QueryParams<OrganizationParam>,
) -> Result<impl IntoResponse, AppError> {
    let organization_id = param.require()?;

    let stats = EventService::new(&state.db)
        .dashboard_stats(organization_id, today())
        .await?;

    Ok((
        StatusCode::OK,
        Json(DashboardStatsResponseDto {
            success: true,
            stats: stats.into_dto(),
        }),
    ))
}

/// List the users of an organization.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("organizationId" = i32, Query, description = "Organization whose users to list")
    ),
    responses(
        (status = 200, description = "Users of the organization", body = UserListDto),
        (status = 400, description = "Organization ID missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    QueryParams(param): QueryParams<OrganizationParam>,
) -> Result<impl IntoResponse, AppError> {
    let organization_id = param.require()?;

    let users = UserService::new(&state.db)
        .list_by_organization(organization_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            success: true,
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/approve-event/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event approved", body = EventResponseDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_event(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).approve(id).await?;

    Ok((StatusCode::OK, event_response(event)))
}

/// Reject an event, including one that was already approved.
#[utoipa::path(
    put,
    path = "/api/admin/reject-event/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event rejected", body = EventResponseDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_event(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).reject(id).await?;

    Ok((StatusCode::OK, event_response(event)))
}

#[utoipa::path(
    put,
    path = "/api/admin/approve-organizer/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User approved", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_organizer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).set_approval(id, true).await?;

    Ok((StatusCode::OK, user_response(user)))
}

#[utoipa::path(
    put,
    path = "/api/admin/reject-organizer/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User rejected", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_organizer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).set_approval(id, false).await?;

    Ok((StatusCode::OK, user_response(user)))
}

/// Flip a user's approval, whatever their role.
#[utoipa::path(
    put,
    path = "/api/admin/toggle-user-status/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User status toggled", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).toggle_status(id).await?;

    Ok((StatusCode::OK, user_response(user)))
}
