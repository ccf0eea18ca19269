//! Signed QR tokens for event check-in.
//!
//! A token is `base64url(payload) "." base64url(signature)` without padding, where the
//! payload is the JSON claims `{eventId, userId, issuedAt}` and the signature is
//! HMAC-SHA256 over the payload bytes. Verification needs only the key, so a scan can be
//! rejected before touching the database.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::server::error::{attendance::AttendanceError, internal::InternalError, AppError};

type HmacSha256 = Hmac<Sha256>;

/// Length of a generated signing key in bytes.
const RANDOM_KEY_LENGTH: usize = 32;

/// What a QR token attests: this user is registered for this event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrClaims {
    pub event_id: i32,
    pub user_id: i32,
    pub issued_at: DateTime<Utc>,
}

/// Issues and verifies QR tokens.
///
/// Cheap to clone; clones share the key.
#[derive(Clone)]
pub struct QrTokenService {
    key: Arc<[u8]>,
}

impl QrTokenService {
    /// Creates a service signing with the given secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: Arc::from(secret),
        }
    }

    /// Creates a service with a random key.
    ///
    /// Tokens issued by this service stop verifying once the process exits.
    pub fn with_random_key() -> Self {
        let mut key = [0u8; RANDOM_KEY_LENGTH];
        rand::rng().fill(&mut key);
        Self::new(&key)
    }

    /// Issues a token for an event and user.
    ///
    /// # Returns
    /// - `Ok(String)` - The encoded token
    /// - `Err(AppError::InternalErr)` - Claims could not be serialized or the key was rejected
    pub fn issue(&self, claims: &QrClaims) -> Result<String, AppError> {
        let payload = serde_json::to_vec(claims).map_err(|e| InternalError::QrTokenEncode {
            event_id: claims.event_id,
            user_id: claims.user_id,
            source: e,
        })?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Decodes a token and checks its signature.
    ///
    /// # Returns
    /// - `Ok(QrClaims)` - The token was issued with this service's key
    /// - `Err(AppError::AttendanceErr(InvalidToken))` - Malformed encoding, bad signature
    ///   or unreadable claims
    /// - `Err(AppError::InternalErr)` - The key was rejected
    pub fn decode(&self, token: &str) -> Result<QrClaims, AppError> {
        let (payload, signature) = token
            .trim()
            .split_once('.')
            .ok_or_else(|| AttendanceError::InvalidToken("missing signature".to_string()))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AttendanceError::InvalidToken(format!("payload encoding: {}", e)))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|e| AttendanceError::InvalidToken(format!("signature encoding: {}", e)))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| AttendanceError::InvalidToken("signature mismatch".to_string()))?;

        let claims = serde_json::from_slice::<QrClaims>(&payload)
            .map_err(|e| AttendanceError::InvalidToken(format!("claims: {}", e)))?;

        Ok(claims)
    }

    fn mac(&self) -> Result<HmacSha256, InternalError> {
        HmacSha256::new_from_slice(&self.key).map_err(|e| InternalError::QrTokenKey(e.to_string()))
    }
}
