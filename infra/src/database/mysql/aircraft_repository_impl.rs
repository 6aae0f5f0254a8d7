//! MySQL implementation of the owned-repository port for aircraft.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;
use wm_shared::types::Pagination;

use wm_core::domain::entities::Aircraft;
use wm_core::errors::RepositoryError;
use wm_core::repositories::{CreateOutcome, OwnedRepository};

use super::{corrupted, database_error};

/// MySQL implementation of `OwnedRepository<Aircraft>`
pub struct MySqlAircraftRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAircraftRepository {
    /// Create a new MySQL aircraft repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Aircraft entity
    fn row_to_aircraft(row: &sqlx::mysql::MySqlRow) -> Result<Aircraft, RepositoryError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| corrupted(format!("failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| corrupted(format!("failed to get user_id: {}", e)))?;

        Ok(Aircraft {
            id: Uuid::parse_str(&id)
                .map_err(|e| corrupted(format!("invalid aircraft UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| corrupted(format!("invalid owner UUID: {}", e)))?,
            registration: row
                .try_get("registration")
                .map_err(|e| corrupted(format!("failed to get registration: {}", e)))?,
            type_icao: row
                .try_get("type_icao")
                .map_err(|e| corrupted(format!("failed to get type_icao: {}", e)))?,
        })
    }
}

#[async_trait]
impl OwnedRepository<Aircraft> for MySqlAircraftRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Aircraft>, RepositoryError> {
        let query = r#"
            SELECT id, user_id, registration, type_icao
            FROM aircrafts
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_aircraft).transpose()
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        pagination: Pagination,
    ) -> Result<Vec<Aircraft>, RepositoryError> {
        // ORDER BY id keeps pages stable across calls
        let query = r#"
            SELECT id, user_id, registration, type_icao
            FROM aircrafts
            WHERE user_id = ?
            ORDER BY id
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.iter().map(Self::row_to_aircraft).collect()
    }

    async fn create(&self, model: &Aircraft) -> Result<CreateOutcome, RepositoryError> {
        let id = Uuid::new_v4();

        let query = r#"
            INSERT INTO aircrafts (id, user_id, registration, type_icao)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(model.user_id.to_string())
            .bind(&model.registration)
            .bind(&model.type_icao)
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

    async fn update(&self, model: &Aircraft) -> Result<bool, RepositoryError> {
        let query = r#"
            UPDATE aircrafts
            SET user_id = ?, registration = ?, type_icao = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(model.user_id.to_string())
            .bind(&model.registration)
            .bind(&model.type_icao)
            .bind(model.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let query = "DELETE FROM aircrafts WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
