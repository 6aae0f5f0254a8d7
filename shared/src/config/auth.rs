//! JWT authentication configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret key for signing tokens
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Access token validity in minutes
    pub access_token_validity_minutes: i64,

    /// Refresh token validity in days
    pub refresh_token_validity_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            issuer: String::from("wingman"),
            audience: String::from("wingman-api"),
            access_token_validity_minutes: 15,
            refresh_token_validity_days: 7,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer);
        let audience = std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience);
        let access_token_validity_minutes = std::env::var("JWT_ACCESS_TOKEN_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_validity_minutes);
        let refresh_token_validity_days = std::env::var("JWT_REFRESH_TOKEN_VALIDITY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_validity_days);

        Self {
            secret,
            issuer,
            audience,
            access_token_validity_minutes,
            refresh_token_validity_days,
        }
    }

    /// Set access token validity in minutes
    pub fn with_access_validity_minutes(mut self, minutes: i64) -> Self {
        self.access_token_validity_minutes = minutes;
        self
    }

    /// Set refresh token validity in days
    pub fn with_refresh_validity_days(mut self, days: i64) -> Self {
        self.refresh_token_validity_days = days;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_validity_minutes, 15);
        assert_eq!(config.refresh_token_validity_days, 7);
        assert_eq!(config.issuer, "wingman");
        assert_eq!(config.audience, "wingman-api");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builders() {
        let config = JwtConfig::new("top-secret")
            .with_access_validity_minutes(5)
            .with_refresh_validity_days(30);

        assert_eq!(config.secret, "top-secret");
        assert_eq!(config.access_token_validity_minutes, 5);
        assert_eq!(config.refresh_token_validity_days, 30);
        assert!(!config.is_using_default_secret());
    }
}
