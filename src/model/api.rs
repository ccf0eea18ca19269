use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure body returned by every endpoint.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Success body for endpoints without a payload.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SuccessDto {
    /// Always `true`.
    pub success: bool,
}

impl SuccessDto {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for SuccessDto {
    fn default() -> Self {
        Self::new()
    }
}
