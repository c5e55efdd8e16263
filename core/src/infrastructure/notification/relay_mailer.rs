use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    notification::{entities::EmailMessage, ports::Mailer},
};

/// HTTP client for the notification relay process.
#[derive(Debug, Clone)]
pub struct RelayMailer {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct RelayErrorResponse {
    error: String,
    details: Option<String>,
}

impl RelayMailer {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }
}

impl Mailer for RelayMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), CoreError> {
        let url = format!("{}/api/emails/send", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Relay request failed: {}", e);
                CoreError::ExternalServiceError(format!("relay unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = match response.json::<RelayErrorResponse>().await {
                Ok(body) => match body.details {
                    Some(details) => format!("{}: {}", body.error, details),
                    None => body.error,
                },
                Err(_) => status.to_string(),
            };
            tracing::error!("Relay rejected email: {}", detail);
            return Err(CoreError::ExternalServiceError(detail));
        }

        Ok(())
    }
}
