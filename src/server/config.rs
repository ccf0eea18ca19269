use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://events.db?mode=rwc";

pub struct Config {
    pub port: u16,
    pub database_url: String,

    /// Key for signing QR tokens. `None` means a random key per process.
    pub qr_token_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok())?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            qr_token_secret: std::env::var("QR_TOKEN_SECRET")
                .ok()
                .filter(|secret| !secret.is_empty()),
        })
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_PORT);
    };

    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value,
            reason: e.to_string(),
        })
}
