use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        registration::{
            EventRegistrationListDto, RegisterForEventDto, RegistrationResponseDto,
            UserRegistrationListDto,
        },
    },
    server::{
        controller::extract::{JsonBody, PathParam},
        error::AppError,
        service::registration::RegistrationService,
        state::AppState,
    },
};

/// Tag for grouping registration endpoints in OpenAPI documentation
pub static REGISTRATION_TAG: &str = "registration";

/// List who registered for an event.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/registrations",
    tag = REGISTRATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registrations with registrant details", body = EventRegistrationListDto),
        (status = 400, description = "Invalid event ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_registrations(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let registrations = RegistrationService::new(&state.db, &state.qr_tokens)
        .list_for_event(event_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventRegistrationListDto {
            success: true,
            registrations: registrations.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Register a user for an event and issue their QR code.
///
/// # Returns
/// - `200 OK` - The registration with its QR token
/// - `400 Bad Request` - Missing user, unknown event or user, or already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/register",
    tag = REGISTRATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = RegisterForEventDto,
    responses(
        (status = 200, description = "Registered", body = RegistrationResponseDto),
        (status = 400, description = "Invalid or duplicate registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_for_event(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i32>,
    JsonBody(payload): JsonBody<RegisterForEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::BadRequest("User ID is required".to_string()))?;

    let registration = RegistrationService::new(&state.db, &state.qr_tokens)
        .register(event_id, user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RegistrationResponseDto {
            success: true,
            registration: registration.into_dto(),
        }),
    ))
}

/// List a user's registrations with their events.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/registrations",
    tag = REGISTRATION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Registrations with events", body = UserRegistrationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_registrations(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let registrations = RegistrationService::new(&state.db, &state.qr_tokens)
        .list_for_user(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserRegistrationListDto {
            success: true,
            registrations: registrations.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}
