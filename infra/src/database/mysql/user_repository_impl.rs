//! MySQL implementation of the UserRepository port.
//!
//! Stores users in the `users` table with UUIDs as CHAR(36). The email
//! column carries a unique index; the driver's unique-violation error is
//! translated into `CreateOutcome::DuplicateKey` so the service layer
//! never sees a driver-specific error for that path.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use wm_core::domain::entities::User;
use wm_core::errors::RepositoryError;
use wm_core::repositories::{CreateOutcome, UserRepository};

use super::{corrupted, database_error};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, RepositoryError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| corrupted(format!("failed to get id: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| corrupted(format!("invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| corrupted(format!("failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| corrupted(format!("failed to get password_hash: {}", e)))?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| corrupted(format!("failed to get refresh_token: {}", e)))?,
            refresh_token_expires_at: row
                .try_get::<Option<DateTime<Utc>>, _>("refresh_token_expires_at")
                .map_err(|e| {
                    corrupted(format!("failed to get refresh_token_expires_at: {}", e))
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let query = r#"
            SELECT id, email, password_hash, refresh_token, refresh_token_expires_at
            FROM users
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let query = r#"
            SELECT id, email, password_hash, refresh_token, refresh_token_expires_at
            FROM users
            WHERE email = ?
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: &User) -> Result<CreateOutcome, RepositoryError> {
        // The store assigns the identifier; whatever the model carries
        // is ignored
        let id = Uuid::new_v4();

        let query = r#"
            INSERT INTO users (id, email, password_hash, refresh_token, refresh_token_expires_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.refresh_token)
            .bind(user.refresh_token_expires_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(CreateOutcome::Created(id)),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(CreateOutcome::DuplicateKey)
            }
            Err(e) => Err(database_error(e)),
        }
    }

    async fn update_refresh_state(
        &self,
        user_id: Uuid,
        refresh_token: Option<&str>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), RepositoryError> {
        // Touches only the two refresh columns
        let query = r#"
            UPDATE users
            SET refresh_token = ?, refresh_token_expires_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(refresh_token)
            .bind(expires_at)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
