//! Token issuance and verification

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;

use crate::domain::value_objects::{Claims, RefreshToken};
use crate::domain::entities::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signing algorithm for access tokens
const ALGORITHM: Algorithm = Algorithm::HS512;

/// Raw entropy of an issued refresh token, in bytes
const REFRESH_TOKEN_BYTES: usize = 32;

/// Issues and verifies the two credential kinds of the system: signed,
/// claims-bearing access tokens and opaque, claimless refresh tokens.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from its configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(ALGORITHM);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed access token for the given user
    ///
    /// The token carries the user's id and email as claims, plus the
    /// configured issuer/audience, and expires after the configured
    /// number of minutes.
    pub fn issue_access_token(&self, user: &User) -> Result<String, DomainError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.config.access_token_validity_minutes);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies an access token and returns its claims
    ///
    /// Signature, issuer, audience and expiry are all checked.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::Expired)
                } else {
                    DomainError::Token(TokenError::Invalid)
                }
            })
    }

    /// Issues a fresh opaque refresh token
    ///
    /// 32 bytes from the thread-local CSPRNG, base64-encoded. The token
    /// carries no claims; it is a bearer secret matched by exact string
    /// comparison against the persisted value.
    pub fn issue_refresh_token(&self) -> RefreshToken {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);

        RefreshToken {
            token: BASE64.encode(bytes),
            expires_at: Utc::now() + Duration::days(self.config.refresh_token_validity_days),
        }
    }
}
