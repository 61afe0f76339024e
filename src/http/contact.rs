//! `POST /api/contact`: relay contact form submissions to the webhook.
//!
//! The body is parsed here rather than through the `Json` extractor so that
//! every failure, malformed payloads included, gets the same 500 envelope.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::{metrics, telemetry};
use crate::relay::RelayError;

pub const CONTACT_ROUTE: &str = "/api/contact";

/// Response envelope returned to the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("invalid JSON payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<ContactResponse>) {
    let start = Instant::now();
    let request_id = request_id(&headers);

    match relay_submission(&state, &body).await {
        Ok(data) => {
            metrics::record_contact_submission(true, start);
            tracing::info!(request_id = %request_id, "Contact form relayed");
            (
                StatusCode::OK,
                Json(ContactResponse {
                    success: true,
                    message: "Form submitted successfully".to_string(),
                    data: Some(data),
                }),
            )
        }
        Err(e) => {
            metrics::record_contact_submission(false, start);
            tracing::error!(request_id = %request_id, error = %e, "Contact form relay failed");
            telemetry::capture_error(CONTACT_ROUTE, &e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse {
                    success: false,
                    message: format!("Error processing form: {}", e),
                    data: None,
                }),
            )
        }
    }
}

async fn relay_submission(state: &AppState, body: &[u8]) -> Result<Value, ContactError> {
    let payload: Value = serde_json::from_slice(body)?;
    let relay = state.relay.as_ref().ok_or(RelayError::NotConfigured)?;
    Ok(relay.forward(&payload).await?)
}
