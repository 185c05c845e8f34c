use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::core::query::build_search_query;
use crate::models::{FilterOptions, ServiceRecord};
use crate::services::{ServiceStore, StoreError};

/// PostgreSQL client for the services directory
///
/// Owns the connection pool; the schema of the services table belongs to
/// the directory ingestion pipeline, this client only reads it.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Wrap an existing pool, for callers that manage their own
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceStore for PostgresClient {
    async fn search(&self, filters: &FilterOptions) -> Result<Vec<ServiceRecord>, StoreError> {
        let mut builder = build_search_query(filters);

        let rows: Vec<ServiceRecord> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Directory search matched {} services", rows.len());

        Ok(rows)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
