// Service exports
pub mod completion;
pub mod directory_api;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FilterOptions, ServiceRecord};

pub use completion::{CompletionBackend, CompletionClient, CompletionError, CompletionStream};
pub use directory_api::DirectoryApiClient;
pub use postgres::PostgresClient;

/// Errors that can occur when fetching service rows
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),
}

/// Read access to the services collection
///
/// Implemented by the Postgres client on the server and by the HTTP client
/// on the view side; handlers and the search session only see this trait,
/// so tests can substitute a mock.
#[async_trait]
pub trait ServiceStore: Send + Sync {
    /// Fetch the rows matching the given filters
    async fn search(&self, filters: &FilterOptions) -> Result<Vec<ServiceRecord>, StoreError>;

    /// Probe whether the backing collection is reachable
    async fn health_check(&self) -> Result<bool, StoreError>;
}
