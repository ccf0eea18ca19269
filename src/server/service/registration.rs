//! Registration service for business logic.
//!
//! Registering issues a signed QR token that the attendee later presents at the door.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, is_unique_violation, registration::RegistrationRepository,
        user::UserRepository,
    },
    error::AppError,
    model::registration::{Registration, RegistrationWithEvent, RegistrationWithUser},
    service::qr_token::{QrClaims, QrTokenService},
};

fn already_registered() -> AppError {
    AppError::Conflict("Already registered for this event".to_string())
}

/// Service providing business logic for event registration.
pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    qr_tokens: &'a QrTokenService,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `qr_tokens` - Token service used to sign registrations
    ///
    /// # Returns
    /// - `RegistrationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, qr_tokens: &'a QrTokenService) -> Self {
        Self { db, qr_tokens }
    }

    /// Registers a user for an event and issues their QR token.
    ///
    /// A concurrent duplicate that slips past the pre-check is rejected by the unique
    /// index and reported as the same conflict.
    ///
    /// # Arguments
    /// - `event_id` - Event to register for
    /// - `user_id` - Registrant
    ///
    /// # Returns
    /// - `Ok(Registration)` - The registration with its token
    /// - `Err(AppError::BadRequest)` - Event or user does not exist
    /// - `Err(AppError::Conflict)` - The user is already registered for the event
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, event_id: i32, user_id: i32) -> Result<Registration, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);

        if EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!("Event {} not found", event_id)));
        }

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!("User {} not found", user_id)));
        }

        if registration_repo
            .find_by_event_and_user(event_id, user_id)
            .await?
            .is_some()
        {
            return Err(already_registered());
        }

        let now = Utc::now();
        let qr_code = self.qr_tokens.issue(&QrClaims {
            event_id,
            user_id,
            issued_at: now,
        })?;

        let registration = registration_repo
            .create(event_id, user_id, qr_code, now)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    already_registered()
                } else {
                    AppError::DbErr(e)
                }
            })?;

        tracing::info!("User {} registered for event {}", user_id, event_id);

        Ok(registration)
    }

    /// Lists an event's registrations with each registrant's name and email.
    ///
    /// Registrants that no longer exist get empty strings.
    pub async fn list_for_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<RegistrationWithUser>, AppError> {
        let registrations = RegistrationRepository::new(self.db)
            .get_by_event(event_id)
            .await?;

        let user_ids = registrations.iter().map(|r| r.user_id).collect();
        let mut users: HashMap<i32, _> = UserRepository::new(self.db)
            .find_by_ids(user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Ok(registrations
            .into_iter()
            .map(|registration| match users.remove(&registration.user_id) {
                Some(user) => RegistrationWithUser {
                    registration,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                },
                None => RegistrationWithUser {
                    registration,
                    first_name: String::new(),
                    last_name: String::new(),
                    email: String::new(),
                },
            })
            .collect())
    }

    /// Lists a user's registrations with the full event for each.
    ///
    /// The event is absent when it no longer exists.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<RegistrationWithEvent>, AppError> {
        let registrations = RegistrationRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        let event_ids = registrations.iter().map(|r| r.event_id).collect();
        let mut events: HashMap<i32, _> = EventRepository::new(self.db)
            .find_by_ids(event_ids)
            .await?
            .into_iter()
            .map(|event| (event.id, event))
            .collect();

        Ok(registrations
            .into_iter()
            .map(|registration| {
                let event = events.remove(&registration.event_id);
                RegistrationWithEvent {
                    registration,
                    event,
                }
            })
            .collect())
    }
}
