//! Domain error types and the typed result model.
//!
//! Expected business failures are carried as data ([`Failure`], wrapped in
//! [`DomainError::Rejected`]) so that every service call site matches on
//! them exhaustively. Persistence and crypto machinery failures get their
//! own variants and surface to the caller unhandled; the presentation
//! layer's global error collaborator turns those into opaque 500s.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of an expected business failure.
///
/// The core never decides HTTP framing; the presentation layer maps each
/// category onto its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// Structurally invalid request relative to a business rule
    BadRequest,
    /// Authentication failure
    Unauthorized,
    /// Entity exists but the caller is not its owner
    Forbidden,
    /// Entity absent
    NotFound,
    /// Uniqueness violation
    Conflict,
}

impl FailureCategory {
    /// Status-like code consumed by the presentation layer
    pub fn status_code(&self) -> u16 {
        match self {
            FailureCategory::BadRequest => 400,
            FailureCategory::Unauthorized => 401,
            FailureCategory::Forbidden => 403,
            FailureCategory::NotFound => 404,
            FailureCategory::Conflict => 409,
        }
    }
}

/// Typed business failure: a category plus a human-readable title/detail
/// pair. Never carries stack traces or internal identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Failure category
    pub category: FailureCategory,
    /// Short summary of what failed
    pub title: String,
    /// Human-readable explanation
    pub detail: String,
}

impl Failure {
    /// Create a failure with an explicit category
    pub fn new(
        category: FailureCategory,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// Structurally invalid request
    pub fn bad_request(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(FailureCategory::BadRequest, title, detail)
    }

    /// Authentication failure
    pub fn unauthorized(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(FailureCategory::Unauthorized, title, detail)
    }

    /// Ownership failure
    pub fn forbidden(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(FailureCategory::Forbidden, title, detail)
    }

    /// Entity absent
    pub fn not_found(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(FailureCategory::NotFound, title, detail)
    }

    /// Uniqueness violation
    pub fn conflict(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(FailureCategory::Conflict, title, detail)
    }

    /// Standard not-found message for a named entity
    pub fn not_found_default(title: impl Into<String>, entity_name: &str) -> Self {
        Self::not_found(
            title,
            format!("The requested {} was not found in the server.", entity_name),
        )
    }

    /// Standard ownership message for a named entity
    pub fn forbidden_default(title: impl Into<String>, entity_name: &str) -> Self {
        Self::forbidden(
            title,
            format!(
                "The current user does not have permission to access this {}.",
                entity_name
            ),
        )
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.detail)
    }
}

/// Fatal persistence failure. Not part of the typed business taxonomy:
/// it propagates out of the services for the global error collaborator.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("database failure: {message}")]
    Database { message: String },

    #[error("stored data could not be decoded: {message}")]
    Corrupted { message: String },
}

/// Token machinery failures, consumed by the authentication middleware
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("token generation failed")]
    GenerationFailed,

    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,
}

/// Password hashing machinery failure
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("password hashing failed")]
    HashingFailed,
}

/// Core domain error: either an expected, typed business failure or a
/// fatal machinery failure.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Expected business failure, returned as data to the caller
    #[error("{0}")]
    Rejected(Failure),

    /// Fatal persistence failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Token signing/verification machinery failure
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Password hashing machinery failure
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl DomainError {
    /// The typed business failure, if this is one
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            DomainError::Rejected(failure) => Some(failure),
            _ => None,
        }
    }

    /// The failure category, if this is a typed business failure
    pub fn category(&self) -> Option<FailureCategory> {
        self.failure().map(|f| f.category)
    }
}

impl From<Failure> for DomainError {
    fn from(failure: Failure) -> Self {
        DomainError::Rejected(failure)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
