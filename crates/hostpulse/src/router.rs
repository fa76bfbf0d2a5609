//! HTTP router configuration

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::api::{metrics, system};
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/api/health", get(system::health))
        .route("/api/metrics", get(metrics::metrics))
        .with_state(state)
}
