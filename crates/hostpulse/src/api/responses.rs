//! Response envelope for the API

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hostpulse_probe::Metrics;

/// Uniform response envelope
///
/// `metrics` is present only on a successful metrics call; `error` is
/// present whenever `ok` is false.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    /// Whether the request succeeded
    pub ok: bool,
    /// UTC timestamp of the response
    pub ts: String,
    /// Collected metrics, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    /// Failure message, when `ok` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Successful response without a payload
    #[must_use]
    pub fn ok() -> Self {
        Self {
            ok: true,
            ts: now(),
            metrics: None,
            error: None,
        }
    }

    /// Successful response carrying metrics
    #[must_use]
    pub fn with_metrics(metrics: Metrics) -> Self {
        Self {
            ok: true,
            ts: now(),
            metrics: Some(metrics),
            error: None,
        }
    }

    /// Failure response with a message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            ts: now(),
            metrics: None,
            error: Some(message.into()),
        }
    }
}

fn now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
