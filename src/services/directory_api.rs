use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::models::{FilterOptions, ServiceRecord};
use crate::services::{ServiceStore, StoreError};

/// HTTP client for the directory search API
///
/// View-side implementation of [`ServiceStore`]: posts the filter payload
/// to `/api/data` the way the results page submits it.
pub struct DirectoryApiClient {
    base_url: String,
    client: Client,
}

impl DirectoryApiClient {
    /// Create a new directory API client
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }
}

#[async_trait]
impl ServiceStore for DirectoryApiClient {
    async fn search(&self, filters: &FilterOptions) -> Result<Vec<ServiceRecord>, StoreError> {
        let url = format!("{}/api/data", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&url).json(filters).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Directory search failed: {} - {}", status, body);
            return Err(StoreError::Api(format!(
                "Directory search failed: {}",
                status
            )));
        }

        let rows: Vec<ServiceRecord> = response.json().await?;

        tracing::debug!("Directory API returned {} services", rows.len());

        Ok(rows)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }
}
