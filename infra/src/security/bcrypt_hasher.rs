//! bcrypt implementation of the password hashing port.

use bcrypt::DEFAULT_COST;

use wm_core::errors::CredentialError;
use wm_core::services::password::{PasswordHasher, PasswordMatch};

/// bcrypt-backed password hasher.
///
/// bcrypt salts every hash and its verification compares the full digest,
/// so timing does not reveal which character of a password differed. A
/// malformed stored hash verifies as `Mismatch`, indistinguishable from a
/// wrong password.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default cost factor
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a hasher with an explicit cost factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        bcrypt::hash(plaintext, self.cost).map_err(|_| CredentialError::HashingFailed)
    }

    fn verify(&self, hash: &str, plaintext: &str) -> PasswordMatch {
        match bcrypt::verify(plaintext, hash) {
            Ok(true) => PasswordMatch::Match,
            Ok(false) | Err(_) => PasswordMatch::Mismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's MIN_COST is not exported in this version; mirror its value.
    const MIN_COST: u32 = 4;

    fn hasher() -> BcryptPasswordHasher {
        // Minimum cost keeps the tests fast; production uses the default
        BcryptPasswordHasher::with_cost(MIN_COST)
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let hasher = hasher();
        let hash = hasher.hash("Pw1!aaaa").unwrap();

        assert!(hasher.verify(&hash, "Pw1!aaaa").is_match());
        assert!(!hasher.verify(&hash, "Pw1!aaab").is_match());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = hasher();
        let first = hasher.hash("Pw1!aaaa").unwrap();
        let second = hasher.hash("Pw1!aaaa").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify(&first, "Pw1!aaaa").is_match());
        assert!(hasher.verify(&second, "Pw1!aaaa").is_match());
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        let hasher = hasher();
        assert!(!hasher.verify("not-a-bcrypt-hash", "Pw1!aaaa").is_match());
    }
}
