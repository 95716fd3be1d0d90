use chrono::Duration;
use secrecy::SecretString;
use serde::Deserialize;

/// Signing secret and lifetime of admin access tokens
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: SecretString,
    pub expiration_hours: i64,
}

impl JwtSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            expiration_hours,
        }
    }

    pub fn token_lifetime(&self) -> Duration {
        Duration::hours(self.expiration_hours)
    }
}
