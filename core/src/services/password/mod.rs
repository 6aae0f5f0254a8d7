//! Password hashing port used by the authentication flow.

use crate::errors::CredentialError;

/// Result of comparing a plaintext password against a stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    /// The plaintext matches the hash
    Match,
    /// The plaintext does not match, or the stored hash is malformed
    Mismatch,
}

impl PasswordMatch {
    /// Whether the verification succeeded
    pub fn is_match(&self) -> bool {
        matches!(self, PasswordMatch::Match)
    }
}

/// Credential hashing contract.
///
/// Implementations must use a salted, deliberately slow algorithm, and
/// verification must not leak which character of the password differed.
/// A malformed stored hash verifies as `Mismatch`, never as an error the
/// caller could treat differently from a wrong password.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// Compare a plaintext password against a stored hash
    fn verify(&self, hash: &str, plaintext: &str) -> PasswordMatch;
}
