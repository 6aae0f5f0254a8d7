//! Request-field validation utilities.
//!
//! These checks run in the presentation layer before a request reaches the
//! core services; the services themselves only enforce ownership and
//! authentication rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum accepted email length
pub const EMAIL_MAX_LENGTH: usize = 100;

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Exact length of an issued refresh token (32 random bytes, base64)
pub const REFRESH_TOKEN_LENGTH: usize = 44;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SPECIAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid regex"));

/// Check that an email is non-empty, well formed and within the length limit
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= EMAIL_MAX_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Check that a password satisfies the strength rules: minimum length,
/// at least one uppercase letter, one lowercase letter, one digit and one
/// special character.
pub fn validate_password(password: &str) -> bool {
    password.len() >= PASSWORD_MIN_LENGTH
        && UPPERCASE_REGEX.is_match(password)
        && LOWERCASE_REGEX.is_match(password)
        && DIGIT_REGEX.is_match(password)
        && SPECIAL_REGEX.is_match(password)
}

/// Check that a string is a plausible refresh token (exact issued length)
pub fn validate_refresh_token(token: &str) -> bool {
    token.len() == REFRESH_TOKEN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_normal_addresses() {
        assert!(validate_email("pilot@example.com"));
        assert!(validate_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email(&format!("{}@example.com", "a".repeat(EMAIL_MAX_LENGTH))));
    }

    #[test]
    fn test_validate_password_requires_all_character_classes() {
        assert!(validate_password("Pw1!aaaa"));
        assert!(!validate_password("pw1!aaaa")); // no uppercase
        assert!(!validate_password("PW1!AAAA")); // no lowercase
        assert!(!validate_password("Pwd!aaaa")); // no digit
        assert!(!validate_password("Pw1aaaaa")); // no special character
        assert!(!validate_password("Pw1!a")); // too short
    }

    #[test]
    fn test_validate_refresh_token_length() {
        assert!(validate_refresh_token(&"x".repeat(44)));
        assert!(!validate_refresh_token(&"x".repeat(43)));
    }
}
