//! Application state shared across HTTP handlers

use std::sync::Arc;

use hostpulse_exec::RemoteExecutor;
use hostpulse_probe::MetricsCollector;

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Executor for ad hoc probes (liveness check)
    pub executor: Arc<dyn RemoteExecutor>,
    /// Metrics aggregator
    pub collector: Arc<MetricsCollector>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(executor: Arc<dyn RemoteExecutor>, config: Config) -> Self {
        let collector = Arc::new(MetricsCollector::new(
            Arc::clone(&executor),
            config.target.command_timeout(),
        ));

        Self {
            executor,
            collector,
            config: Arc::new(config),
        }
    }
}
