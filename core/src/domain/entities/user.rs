//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account.
///
/// The email is unique and stored lowercase; the password is only ever
/// held as a hash. The refresh-token pair of fields is the single piece
/// of mutable credential state: set on login/refresh, cleared on logout
/// and on expired refresh attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, normalized to lowercase
    pub email: String,

    /// Password hash; the plaintext is never stored or logged
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    /// Currently valid refresh token, if any
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,

    /// Expiry of the current refresh token
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new User with empty refresh state.
    ///
    /// The email is normalized to lowercase so uniqueness is
    /// case-insensitive.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into().to_lowercase(),
            password_hash: Some(password_hash.into()),
            refresh_token: None,
            refresh_token_expires_at: None,
        }
    }

    /// Replaces the refresh state with a newly issued token
    pub fn set_refresh_state(&mut self, token: impl Into<String>, expires_at: DateTime<Utc>) {
        self.refresh_token = Some(token.into());
        self.refresh_token_expires_at = Some(expires_at);
    }

    /// Clears the refresh state, invalidating any outstanding token
    pub fn clear_refresh_state(&mut self) {
        self.refresh_token = None;
        self.refresh_token_expires_at = None;
    }

    /// Whether the user currently holds a refresh token
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token
            .as_deref()
            .map(|t| !t.is_empty())
            .unwrap_or(false)
    }

    /// Whether the stored refresh token has passed its expiry
    pub fn refresh_token_expired(&self, now: DateTime<Utc>) -> bool {
        match self.refresh_token_expires_at {
            Some(expires_at) => expires_at <= now,
            None => true,
        }
    }
}
