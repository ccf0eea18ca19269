use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/verify-qr`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerifyQrDto {
    /// Token scanned from the attendee's QR code.
    #[serde(default)]
    pub qr_data: Option<String>,
    /// Event the scanner is checking people into.
    #[serde(default)]
    pub event_id: Option<i32>,
}

/// Attendee shown to the scanning operator.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AttendeeDto {
    pub name: String,
    pub email: String,
    /// When the attendee was checked in.
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct VerifyQrResponseDto {
    pub success: bool,
    pub message: String,
    pub attendee: AttendeeDto,
}

/// 409 body for a repeated scan. Still names the attendee for the operator.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AlreadyAttendedDto {
    /// Always `false`.
    pub success: bool,
    pub error: String,
    pub attendee: AttendeeDto,
}
