//! Configuration for the token service

use wm_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric signing secret
    pub secret: String,
    /// Issuer claim stamped on and required from every access token
    pub issuer: String,
    /// Audience claim stamped on and required from every access token
    pub audience: String,
    /// Access token validity in minutes
    pub access_token_validity_minutes: i64,
    /// Refresh token validity in days
    pub refresh_token_validity_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            issuer: "wingman".to_string(),
            audience: "wingman-api".to_string(),
            access_token_validity_minutes: 15,
            refresh_token_validity_days: 7,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            issuer: config.issuer,
            audience: config.audience,
            access_token_validity_minutes: config.access_token_validity_minutes,
            refresh_token_validity_days: config.refresh_token_validity_days,
        }
    }
}
