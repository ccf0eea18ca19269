use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::{LoginDto, RegisterUserDto, UserResponseDto},
    },
    server::{
        controller::extract::JsonBody,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{LoginParam, RegisterUserParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Self-register a user.
///
/// Students and employees can log in immediately. Organizers wait for an admin's
/// approval. Admin accounts cannot be self-registered.
///
/// # Returns
/// - `200 OK` - The new user
/// - `400 Bad Request` - Missing fields, bad role, unknown organization or email in use
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = UserResponseDto),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::try_from(payload)?;

    let user = AuthService::new(&state.db).register(param).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password and start a session.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `400 Bad Request` - Missing fields or unknown email
/// - `401 Unauthorized` - Wrong password
/// - `403 Forbidden` - Account awaiting approval
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserResponseDto),
        (status = 400, description = "Missing fields or unknown email", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 403, description = "Account pending approval", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::try_from(payload)?;

    let user = AuthService::new(&state.db).login(param).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(SuccessDto::new())))
}

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - The session's user
/// - `401 Unauthorized` - No session, or its user was removed
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}
