use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventListDto, EventResponseDto, UpcomingEventListDto},
    },
    server::{
        controller::{
            extract::{JsonBody, QueryParams},
            param::{EventFilterParam, OrganizationParam},
        },
        error::AppError,
        model::event::{CreateEventParam, EventFilter},
        service::event::EventService,
        state::AppState,
        util::date::today,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List events, optionally narrowed to one organizer and/or organization.
///
/// Events are returned in creation order with their current registrations.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("organizerId" = Option<i32>, Query, description = "Only events created by this organizer"),
        ("organizationId" = Option<i32>, Query, description = "Only events of this organization")
    ),
    responses(
        (status = 200, description = "Matching events", body = EventListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    QueryParams(param): QueryParams<EventFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .list(EventFilter::from(param))
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventListDto {
            success: true,
            events: events.into_iter().map(|e| e.into_dto()).collect(),
        }),
    ))
}

/// Submit an event for approval.
///
/// # Returns
/// - `200 OK` - The new event, status `pending`
/// - `400 Bad Request` - Missing fields, bad date or capacity, unknown organizer or
///   organization
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Event created", body = EventResponseDto),
        (status = 400, description = "Invalid event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateEventParam::try_from(payload)?;

    let event = EventService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::OK,
        Json(EventResponseDto {
            success: true,
            event: event.into_dto(),
        }),
    ))
}

/// List approved events from today onwards for students and employees to browse.
#[utoipa::path(
    get,
    path = "/api/student/events",
    tag = EVENT_TAG,
    params(
        ("organizationId" = i32, Query, description = "Organization whose events to list")
    ),
    responses(
        (status = 200, description = "Upcoming approved events with organizer names", body = UpcomingEventListDto),
        (status = 400, description = "Organization ID missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upcoming_events(
    State(state): State<AppState>,
    QueryParams(param): QueryParams<OrganizationParam>,
) -> Result<impl IntoResponse, AppError> {
    let organization_id = param.require()?;

    let events = EventService::new(&state.db)
        .list_upcoming_approved(organization_id, today())
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpcomingEventListDto {
            success: true,
            events: events.into_iter().map(|e| e.into_dto()).collect(),
        }),
    ))
}
