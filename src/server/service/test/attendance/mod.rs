use crate::server::{
    error::{attendance::AttendanceError, AppError},
    service::{
        attendance::AttendanceService,
        qr_token::{QrClaims, QrTokenService},
        registration::RegistrationService,
    },
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod verify;
