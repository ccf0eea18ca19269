use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        attendance::{AlreadyAttendedDto, VerifyQrDto, VerifyQrResponseDto},
    },
    server::{
        controller::extract::JsonBody, error::AppError, service::attendance::AttendanceService,
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Check an attendee in by their scanned QR code.
///
/// # Returns
/// - `200 OK` - Attendance recorded
/// - `400 Bad Request` - Missing fields, invalid code or code for another event
/// - `404 Not Found` - The code's user no longer exists
/// - `409 Conflict` - Already checked in; the body names the attendee
#[utoipa::path(
    post,
    path = "/api/verify-qr",
    tag = ATTENDANCE_TAG,
    request_body = VerifyQrDto,
    responses(
        (status = 200, description = "Attendance recorded", body = VerifyQrResponseDto),
        (status = 400, description = "Invalid QR code", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Attendance already recorded", body = AlreadyAttendedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_qr(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VerifyQrDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(qr_data), Some(event_id)) = (payload.qr_data, payload.event_id) else {
        return Err(AppError::BadRequest(
            "QR data and event ID are required".to_string(),
        ));
    };

    let check_in = AttendanceService::new(&state.db, &state.qr_tokens)
        .verify(&qr_data, event_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(VerifyQrResponseDto {
            success: true,
            message: "Attendance recorded".to_string(),
            attendee: check_in.into_dto(),
        }),
    ))
}
