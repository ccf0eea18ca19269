//! Attendance service: QR verification and at-most-once check-in.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{attendance::AttendanceRepository, is_unique_violation, user::UserRepository},
    error::{attendance::AttendanceError, AppError},
    model::{attendance::CheckIn, user::User},
    service::qr_token::QrTokenService,
};

/// Service providing QR check-in at the door.
pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
    qr_tokens: &'a QrTokenService,
}

impl<'a> AttendanceService<'a> {
    /// Creates a new AttendanceService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `qr_tokens` - Token service used to verify scanned codes
    ///
    /// # Returns
    /// - `AttendanceService` - New service instance
    pub fn new(db: &'a DatabaseConnection, qr_tokens: &'a QrTokenService) -> Self {
        Self { db, qr_tokens }
    }

    /// Verifies a scanned QR token and records the check-in.
    ///
    /// Each attendee is checked in at most once per event. A repeat scan, or a concurrent
    /// scan that loses the race on the unique index, reports the original check-in.
    ///
    /// # Arguments
    /// - `token` - Scanned token
    /// - `event_id` - Event the operator is checking people into
    ///
    /// # Returns
    /// - `Ok(CheckIn)` - Attendee name, email and check-in time
    /// - `Err(AttendanceError::InvalidToken)` - The token is malformed or forged
    /// - `Err(AttendanceError::EventMismatch)` - The token is for another event
    /// - `Err(AppError::NotFound)` - The token's user does not exist
    /// - `Err(AttendanceError::AlreadyAttended)` - Already checked in
    pub async fn verify(&self, token: &str, event_id: i32) -> Result<CheckIn, AppError> {
        let claims = self.qr_tokens.decode(token)?;

        if claims.event_id != event_id {
            return Err(AttendanceError::EventMismatch {
                token_event_id: claims.event_id,
                event_id,
            }
            .into());
        }

        let user = UserRepository::new(self.db)
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let attendance_repo = AttendanceRepository::new(self.db);

        if let Some(existing) = attendance_repo
            .find_by_event_and_user(event_id, user.id)
            .await?
        {
            return Err(already_attended(&user, existing.timestamp));
        }

        let attendance = match attendance_repo.create(event_id, user.id, Utc::now()).await {
            Ok(attendance) => attendance,
            Err(e) if is_unique_violation(&e) => {
                let existing = attendance_repo
                    .find_by_event_and_user(event_id, user.id)
                    .await?
                    .ok_or(AppError::DbErr(e))?;
                return Err(already_attended(&user, existing.timestamp));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("User {} checked in to event {}", user.id, event_id);

        Ok(CheckIn {
            name: user.full_name(),
            email: user.email,
            timestamp: attendance.timestamp,
        })
    }
}

fn already_attended(user: &User, timestamp: DateTime<Utc>) -> AppError {
    AttendanceError::AlreadyAttended(CheckIn {
        name: user.full_name(),
        email: user.email.clone(),
        timestamp,
    })
    .into()
}
