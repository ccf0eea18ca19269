use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user with the given email exists.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Login attempted for unknown email")]
    UnknownEmail,

    /// The password did not verify against the stored hash.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid password for user {0}")]
    InvalidCredentials(i32),

    /// The account exists but has not been approved by an admin yet.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} attempted to log in before approval")]
    NotApproved(i32),

    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay short; the variant detail is logged at debug level.
///
/// # Returns
/// - 400 Bad Request - Unknown email
/// - 401 Unauthorized - Wrong password or no valid session
/// - 403 Forbidden - Account awaiting approval
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UnknownEmail => (StatusCode::BAD_REQUEST, "User not found"),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Invalid password"),
            Self::NotApproved(_) => (
                StatusCode::FORBIDDEN,
                "Your account is pending approval by an administrator",
            ),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
