use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::{StreamExt, TryStreamExt};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the completion service
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("completion service returned error: {0}")]
    ApiError(String),

    #[error("unauthorized: invalid API key")]
    Unauthorized,
}

/// Raw byte stream of a completion response, relayed unmodified
pub type CompletionStream = BoxStream<'static, Result<Bytes, CompletionError>>;

/// A text-completion service that streams generated tokens
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Request a streamed completion for the prompt
    async fn stream_completion(&self, prompt: &str) -> Result<CompletionStream, CompletionError>;
}

/// HTTP client for an OpenAI-style completion API
pub struct CompletionClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl CompletionClient {
    /// Create a new completion client
    ///
    /// Only the connect phase is bounded; the response body may stream for
    /// as long as the model generates.
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            model,
            client,
        }
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn stream_completion(&self, prompt: &str) -> Result<CompletionStream, CompletionError> {
        let url = format!(
            "{}/v1/completions",
            self.endpoint.trim_end_matches('/')
        );

        tracing::debug!("Requesting streamed completion from: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "prompt": prompt,
                "stream": true,
            }))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(CompletionError::Unauthorized);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Completion request failed: {} - {}", status, body);
            return Err(CompletionError::ApiError(format!(
                "Completion request failed: {}",
                status
            )));
        }

        Ok(response
            .bytes_stream()
            .map_err(CompletionError::from)
            .boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_client_creation() {
        let client = CompletionClient::new(
            "https://api.completion.test/".to_string(),
            "test_key".to_string(),
            "gpt-3.5-turbo".to_string(),
        );

        assert_eq!(client.endpoint, "https://api.completion.test/");
        assert_eq!(client.model, "gpt-3.5-turbo");
    }
}
