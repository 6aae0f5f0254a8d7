//! Connection pool management for MySQL

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use wm_shared::config::DatabaseConfig;

/// Wrapper around the SQLx MySQL pool, built once at process start and
/// cloned into each repository.
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Establishes a connection pool from the database configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "database connection pool established"
        );

        Ok(Self { pool })
    }

    /// A handle to the underlying pool; cheap to clone
    pub fn pool(&self) -> MySqlPool {
        self.pool.clone()
    }

    /// Verifies the pool can reach the database
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
