//! Authentication flow orchestration

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::{LoginRequest, RefreshRequest, SignUpRequest, TokenPair};
use crate::errors::{DomainError, DomainResult, Failure};
use crate::repositories::{CreateOutcome, UserRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Authentication service orchestrating sign-up, login, refresh and
/// logout over the user repository, the password hasher and the token
/// issuer. Stateless; safe to share across concurrent callers.
pub struct AuthService<U, P>
where
    U: UserRepository,
    P: PasswordHasher,
{
    /// User repository for account and refresh-state persistence
    user_repository: Arc<U>,
    /// Salted slow hasher for passwords
    password_hasher: Arc<P>,
    /// Issuer of access and refresh tokens
    token_service: Arc<TokenService>,
}

impl<U, P> AuthService<U, P>
where
    U: UserRepository,
    P: PasswordHasher,
{
    /// Creates a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<P>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    /// Registers a new account.
    ///
    /// The plaintext password and its confirmation are erased from the
    /// request as soon as the hash exists, so nothing downstream can
    /// accidentally log them. An email already registered answers
    /// `Conflict` and leaves the existing account untouched.
    pub async fn sign_up(&self, mut request: SignUpRequest) -> DomainResult<()> {
        let password_hash = self.password_hasher.hash(&request.password)?;
        request.scrub_secrets();

        let user = User::new(request.email.as_str(), password_hash);

        match self.user_repository.create(&user).await? {
            CreateOutcome::Created(id) => {
                tracing::info!(user_id = %id, "new user signed up");
                Ok(())
            }
            CreateOutcome::DuplicateKey => Err(Failure::conflict(
                "Failed to create new user.",
                "Email address already used.",
            )
            .into()),
        }
    }

    /// Authenticates a user and issues a fresh token pair.
    ///
    /// An unknown email and a wrong password answer with byte-identical
    /// failures so responses cannot be used to enumerate accounts.
    pub async fn login(&self, mut request: LoginRequest) -> DomainResult<TokenPair> {
        const ERROR_TITLE: &str = "Login failed.";
        const ERROR_DETAIL: &str = "Email or password wrong.";

        let user = match self.user_repository.find_by_email(&request.email).await? {
            Some(user) => user,
            None => {
                request.scrub_secrets();
                return Err(Failure::unauthorized(ERROR_TITLE, ERROR_DETAIL).into());
            }
        };

        let stored_hash = user.password_hash.as_deref().unwrap_or_default();
        let verification = self.password_hasher.verify(stored_hash, &request.password);
        request.scrub_secrets();

        if !verification.is_match() {
            return Err(Failure::unauthorized(ERROR_TITLE, ERROR_DETAIL).into());
        }

        tracing::info!(user_id = %user.id, "user logged in");
        self.issue_and_persist(&user).await
    }

    /// Exchanges a refresh token for a new access/refresh pair.
    ///
    /// Rotation is single-use: the persisted token is overwritten, so
    /// the presented one never works twice. An expired token clears the
    /// stored state entirely, forcing a fresh login.
    pub async fn refresh(&self, request: RefreshRequest) -> DomainResult<TokenPair> {
        const ERROR_TITLE: &str = "Failed to refresh session.";

        let user = self
            .user_repository
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::from(Failure::not_found_default(ERROR_TITLE, "User"))
            })?;

        if !user.has_refresh_token()
            || user.refresh_token.as_deref() != Some(request.refresh_token.as_str())
        {
            return Err(Failure::bad_request(ERROR_TITLE, "Invalid Refresh Token.").into());
        }

        if user.refresh_token_expired(Utc::now()) {
            self.user_repository
                .update_refresh_state(user.id, None, None)
                .await?;

            tracing::info!(user_id = %user.id, "expired refresh token cleared");
            return Err(Failure::unauthorized(
                ERROR_TITLE,
                "Refresh Token is expired. A new login is necessary.",
            )
            .into());
        }

        tracing::debug!(user_id = %user.id, "rotating refresh token");
        self.issue_and_persist(&user).await
    }

    /// Clears the caller's persisted refresh state. Idempotent: logging
    /// out twice is not an error.
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.user_repository
            .update_refresh_state(user_id, None, None)
            .await?;

        tracing::info!(user_id = %user_id, "user logged out");
        Ok(())
    }

    /// Issues a token pair for the user and persists the new refresh
    /// state, invalidating whatever token was stored before
    async fn issue_and_persist(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.token_service.issue_access_token(user)?;
        let refresh_token = self.token_service.issue_refresh_token();

        self.user_repository
            .update_refresh_state(
                user.id,
                Some(&refresh_token.token),
                Some(refresh_token.expires_at),
            )
            .await?;

        Ok(TokenPair::new(user.id, access_token, refresh_token.token))
    }
}
