//! Metrics endpoint

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::api::responses::ApiResponse;
use crate::state::AppState;

/// Collect and return one metrics sample from the target
pub async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    match state.collector.collect().await {
        Ok(metrics) => (StatusCode::OK, Json(ApiResponse::with_metrics(metrics))).into_response(),
        Err(e) => {
            warn!(error = %e, "metrics collection failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error(e.to_string())),
            )
                .into_response()
        }
    }
}
