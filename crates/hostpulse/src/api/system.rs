//! Root and liveness endpoints

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

/// Command run by the liveness probe
const HEALTH_PROBE: &str = "echo ok";

/// Plain-text banner
pub async fn root() -> impl IntoResponse {
    "hostpulse is running. Try GET /api/health or /api/metrics\n"
}

/// Liveness probe: one trivial command against the target
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let timeout = state.config.target.command_timeout();

    match state.executor.execute(HEALTH_PROBE, timeout).await {
        Ok(_) => (StatusCode::OK, Json(ApiResponse::ok())).into_response(),
        Err(e) => {
            warn!(error = %e, "health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error(e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{FailingExecutor, state_with};
    use hostpulse_exec::LocalExecutor;

    #[tokio::test]
    async fn health_reports_ok_when_the_probe_succeeds() {
        let state = state_with(Arc::new(LocalExecutor::new()));

        let response = health(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = crate::api::test_support::json_body(response).await;
        assert_eq!(body["ok"], true);
        assert!(body["ts"].as_str().unwrap().ends_with('Z'));
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn health_maps_any_failure_to_503() {
        let state = state_with(Arc::new(FailingExecutor));

        let response = health(State(state)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = crate::api::test_support::json_body(response).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "connection failed: connection refused");
    }
}
