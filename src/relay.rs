//! Contact form webhook relay.
//!
//! # Responsibilities
//! - Forward a submission verbatim (JSON POST) to the automation webhook
//! - Hand back whatever the webhook answered
//!
//! # Design Decisions
//! - One attempt per submission; failures are surfaced, never retried
//! - Non-2xx answers are failures
//! - A non-JSON answer body is returned as a JSON string

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::ContactConfig;

/// Errors from forwarding a submission.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("contact webhook is not configured")]
    NotConfigured,

    #[error("webhook responded with HTTP {0}")]
    Status(StatusCode),

    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// HTTP client bound to the configured webhook.
#[derive(Debug, Clone)]
pub struct ContactRelay {
    client: reqwest::Client,
    webhook_url: Url,
}

impl ContactRelay {
    pub fn new(webhook_url: Url, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("landing-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// `None` when no webhook is configured.
    pub fn from_config(config: &ContactConfig) -> Result<Option<Self>, RelayError> {
        config
            .webhook_url
            .clone()
            .map(|url| Self::new(url, Duration::from_secs(config.timeout_secs)))
            .transpose()
    }

    pub fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }

    /// Forward `payload` and return the webhook's answer.
    pub async fn forward(&self, payload: &Value) -> Result<Value, RelayError> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())))
    }
}
