use crate::error::GenerateError;
use crate::model::{GenerationRequest, GenerationResponse};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Structured error body the service sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Seam between the UI loop and the network, so tests can drive the app
/// with a canned backend.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerateError>;
}

pub struct GenerateClient {
    base_url: String,
    client: reqwest::Client,
}

impl GenerateClient {
    /// Generation can take minutes end to end, so the client carries no
    /// overall timeout; an in-flight request cannot be aborted.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("buzztui/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /api/health`.
    pub async fn health(&self) -> Result<(), GenerateError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| GenerateError::Transport(transport_message(&e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GenerateError::http(status.as_u16(), None))
        }
    }
}

#[async_trait]
impl GenerateBackend for GenerateClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerateError> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(transport_message(&e)))?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: use the structured detail if the body parses,
            // otherwise fall back to the bare status.
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(GenerateError::http(status.as_u16(), detail));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(transport_message(&e)))?;
        serde_json::from_str(&body).map_err(|e| GenerateError::Parse(e.to_string()))
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "network request failed".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = GenerateClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
