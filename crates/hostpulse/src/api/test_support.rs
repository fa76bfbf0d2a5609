//! Shared fixtures for handler tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;

use hostpulse_exec::{ExecError, ExecOutput, RemoteExecutor};
use hostpulse_probe::commands;

use crate::config::{Config, ServerConfig, TargetConfig};
use crate::state::AppState;

/// Executor that fails every invocation at the transport layer
pub(crate) struct FailingExecutor;

#[async_trait]
impl RemoteExecutor for FailingExecutor {
    async fn execute(&self, _cmd: &str, _timeout: Duration) -> Result<ExecOutput, ExecError> {
        Err(ExecError::ConnectionFailed("connection refused".to_string()))
    }
}

/// Executor replaying healthy canned probe outputs
pub(crate) struct ScriptedExecutor;

#[async_trait]
impl RemoteExecutor for ScriptedExecutor {
    async fn execute(&self, cmd: &str, _timeout: Duration) -> Result<ExecOutput, ExecError> {
        let stdout = match cmd {
            commands::CPU_PERCENT => "12.5",
            commands::MEMORY => "43.2 8000000000 3456000000 4544000000",
            commands::DISK => "61 100000000000 61000000000 39000000000 /",
            commands::LOAD_AVG => "0.42 0.36 0.30",
            commands::UPTIME => "123456",
            commands::HOSTNAME => "web01",
            commands::NET_IO => "123456789 987654321",
            other => other.trim_start_matches("echo ").trim_matches('\''),
        };

        Ok(ExecOutput {
            status: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }
}

pub(crate) fn state_with(executor: Arc<dyn RemoteExecutor>) -> Arc<AppState> {
    let config = Config {
        server: ServerConfig::default(),
        target: TargetConfig {
            host: "127.0.0.1".to_string(),
            port: 22,
            user: "monitor".to_string(),
            key_path: "/dev/null".into(),
            connect_timeout_ms: 6000,
            command_timeout_ms: 8000,
        },
    };

    Arc::new(AppState::new(executor, config))
}

pub(crate) async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
