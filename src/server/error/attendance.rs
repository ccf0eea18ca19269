use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, attendance::AlreadyAttendedDto},
    server::model::attendance::CheckIn,
};

#[derive(Error, Debug)]
pub enum AttendanceError {
    /// The scanned token is not one we issued: bad encoding, bad payload or bad signature.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid QR token: {0}")]
    InvalidToken(String),

    /// The token was issued for a different event than the one being scanned for.
    ///
    /// Results in a 400 Bad Request response.
    #[error("QR token for event {token_event_id} scanned at event {event_id}")]
    EventMismatch { token_event_id: i32, event_id: i32 },

    /// The attendee was already checked in. Carries the original check-in so the
    /// operator still sees who it was.
    ///
    /// Results in a 409 Conflict response.
    #[error("{} already checked in", .0.name)]
    AlreadyAttended(CheckIn),
}

/// Converts attendance errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid token or event mismatch
/// - 409 Conflict - Repeat scan, with the attendee in the body
impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidToken(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("Invalid QR code"))).into_response()
            }
            Self::EventMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("QR code is not valid for this event")),
            )
                .into_response(),
            Self::AlreadyAttended(check_in) => (
                StatusCode::CONFLICT,
                Json(AlreadyAttendedDto {
                    success: false,
                    error: "Attendance already recorded".to_string(),
                    attendee: check_in.into_dto(),
                }),
            )
                .into_response(),
        }
    }
}
