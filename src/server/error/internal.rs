use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {reason}")]
    PasswordHash {
        /// The reason reported by the hasher
        reason: String,
    },

    /// A QR token payload could not be serialized.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode QR token for event {event_id} user {user_id}: {source}")]
    QrTokenEncode {
        event_id: i32,
        user_id: i32,
        #[source]
        source: serde_json::Error,
    },

    /// The QR signing key was rejected by HMAC.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Invalid QR signing key: {0}")]
    QrTokenKey(String),
}
