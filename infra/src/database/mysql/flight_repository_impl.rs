//! MySQL implementation of the owned-repository port for flights.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;
use wm_shared::types::Pagination;

use wm_core::domain::entities::{Flight, FlightStatus};
use wm_core::errors::RepositoryError;
use wm_core::repositories::{CreateOutcome, OwnedRepository};

use super::{corrupted, database_error};

/// MySQL implementation of `OwnedRepository<Flight>`
pub struct MySqlFlightRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlFlightRepository {
    /// Create a new MySQL flight repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Flight entity
    fn row_to_flight(row: &sqlx::mysql::MySqlRow) -> Result<Flight, RepositoryError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| corrupted(format!("failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| corrupted(format!("failed to get user_id: {}", e)))?;
        let aircraft_id: String = row
            .try_get("aircraft_id")
            .map_err(|e| corrupted(format!("failed to get aircraft_id: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| corrupted(format!("failed to get status: {}", e)))?;

        Ok(Flight {
            id: Uuid::parse_str(&id)
                .map_err(|e| corrupted(format!("invalid flight UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| corrupted(format!("invalid owner UUID: {}", e)))?,
            aircraft_id: Uuid::parse_str(&aircraft_id)
                .map_err(|e| corrupted(format!("invalid aircraft UUID: {}", e)))?,
            status: status
                .parse::<FlightStatus>()
                .map_err(corrupted)?,
            departure_at: row
                .try_get::<DateTime<Utc>, _>("departure_at")
                .map_err(|e| corrupted(format!("failed to get departure_at: {}", e)))?,
            departure_icao: row
                .try_get("departure_icao")
                .map_err(|e| corrupted(format!("failed to get departure_icao: {}", e)))?,
            arrival_icao: row
                .try_get("arrival_icao")
                .map_err(|e| corrupted(format!("failed to get arrival_icao: {}", e)))?,
            alternate_icao: row
                .try_get("alternate_icao")
                .map_err(|e| corrupted(format!("failed to get alternate_icao: {}", e)))?,
            duration_minutes: row
                .try_get("duration_minutes")
                .map_err(|e| corrupted(format!("failed to get duration_minutes: {}", e)))?,
        })
    }
}

#[async_trait]
impl OwnedRepository<Flight> for MySqlFlightRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Flight>, RepositoryError> {
        let query = r#"
            SELECT id, user_id, aircraft_id, status, departure_at,
                   departure_icao, arrival_icao, alternate_icao, duration_minutes
            FROM flights
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_flight).transpose()
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        pagination: Pagination,
    ) -> Result<Vec<Flight>, RepositoryError> {
        // ORDER BY id keeps pages stable across calls
        let query = r#"
            SELECT id, user_id, aircraft_id, status, departure_at,
                   departure_icao, arrival_icao, alternate_icao, duration_minutes
            FROM flights
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

        rows.iter().map(Self::row_to_flight).collect()
    }

    async fn create(&self, model: &Flight) -> Result<CreateOutcome, RepositoryError> {
        let id = Uuid::new_v4();

        let query = r#"
            INSERT INTO flights (id, user_id, aircraft_id, status, departure_at,
                                 departure_icao, arrival_icao, alternate_icao, duration_minutes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(model.user_id.to_string())
            .bind(model.aircraft_id.to_string())
            .bind(model.status.as_str())
            .bind(model.departure_at)
            .bind(&model.departure_icao)
            .bind(&model.arrival_icao)
            .bind(&model.alternate_icao)
            .bind(model.duration_minutes)
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

    async fn update(&self, model: &Flight) -> Result<bool, RepositoryError> {
        let query = r#"
            UPDATE flights
            SET user_id = ?, aircraft_id = ?, status = ?, departure_at = ?,
                departure_icao = ?, arrival_icao = ?, alternate_icao = ?, duration_minutes = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(model.user_id.to_string())
            .bind(model.aircraft_id.to_string())
            .bind(model.status.as_str())
            .bind(model.departure_at)
            .bind(&model.departure_icao)
            .bind(&model.arrival_icao)
            .bind(&model.alternate_icao)
            .bind(model.duration_minutes)
            .bind(model.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let query = "DELETE FROM flights WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
