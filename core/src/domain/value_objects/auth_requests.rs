//! Authentication request value objects.
//!
//! These carry plaintext credentials for the short window between request
//! decoding and hashing/verification. They deliberately do not derive
//! `Serialize`, and their `Debug` output redacts the secret fields, so a
//! stray log line cannot leak a password.

use std::fmt;

use uuid::Uuid;

/// Sign-up request carrying the credentials of a new account
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    /// Email address, normalized to lowercase on construction
    pub email: String,

    /// Plaintext password; cleared by the service right after hashing
    pub password: String,

    /// Plaintext confirmation; cleared together with the password
    pub password_confirmation: String,
}

impl SignUpRequest {
    /// Creates a sign-up request, lowercasing the email
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().to_lowercase(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }

    /// Erases the plaintext credential fields
    pub fn scrub_secrets(&mut self) {
        self.password.clear();
        self.password_confirmation.clear();
    }
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}

/// Login request carrying the credentials of an existing account
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email address, normalized to lowercase on construction
    pub email: String,

    /// Plaintext password; cleared by the service right after verification
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request, lowercasing the email
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().to_lowercase(),
            password: password.into(),
        }
    }

    /// Erases the plaintext credential field
    pub fn scrub_secrets(&mut self) {
        self.password.clear();
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Refresh request exchanging an opaque refresh token for a new pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    /// User the refresh token was issued to
    pub user_id: Uuid,

    /// Opaque refresh token presented by the caller
    pub refresh_token: String,
}

impl RefreshRequest {
    /// Creates a refresh request
    pub fn new(user_id: Uuid, refresh_token: impl Into<String>) -> Self {
        Self {
            user_id,
            refresh_token: refresh_token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_normalizes_email() {
        let request = SignUpRequest::new("Pilot@Example.COM", "Pw1!aaaa", "Pw1!aaaa");
        assert_eq!(request.email, "pilot@example.com");
    }

    #[test]
    fn test_scrub_secrets_empties_passwords() {
        let mut request = SignUpRequest::new("pilot@example.com", "Pw1!aaaa", "Pw1!aaaa");
        request.scrub_secrets();
        assert!(request.password.is_empty());
        assert!(request.password_confirmation.is_empty());
    }

    #[test]
    fn test_debug_redacts_password() {
        let request = LoginRequest::new("pilot@example.com", "Pw1!aaaa");
        let output = format!("{:?}", request);
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("Pw1!aaaa"));
    }
}
