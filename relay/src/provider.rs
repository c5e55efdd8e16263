use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP client for the email-delivery provider.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    base_url: String,
    api_key: String,
    sender: String,
    client: Client,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider rejected the message: {0}")]
    Rejected(String),
}

#[derive(Debug, Serialize)]
struct SendRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

impl ProviderClient {
    pub fn new(base_url: String, api_key: String, sender: String) -> Self {
        Self {
            base_url,
            api_key,
            sender,
            client: Client::new(),
        }
    }

    /// Forwards one message. No retry, no queue: the caller gets the
    /// provider's verdict and a duplicate call sends a duplicate email.
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<String, ProviderError> {
        let url = format!("{}/emails", self.base_url);
        let request = SendRequest {
            from: self.sender.clone(),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Provider request failed: {}", e);
                ProviderError::Unreachable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Provider error: {} - {}", status, error_text);
            return Err(ProviderError::Rejected(format!(
                "{} - {}",
                status, error_text
            )));
        }

        let body: SendResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse provider response: {}", e);
            ProviderError::Rejected(format!("unparseable provider response: {}", e))
        })?;

        Ok(body.id.unwrap_or_else(|| "unknown".to_string()))
    }
}
