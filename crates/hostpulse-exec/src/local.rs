//! Local command execution using `tokio::process`
//!
//! Same contract as the SSH executor, against the local machine. Useful for
//! development and for exercising callers without a reachable SSH target.

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::error::ExecError;
use crate::result::ExecOutput;
use crate::traits::RemoteExecutor;

/// Local command executor
#[derive(Debug, Clone, Default)]
pub struct LocalExecutor;

impl LocalExecutor {
    /// Create a new local executor
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn execute_inner(cmd: &str) -> Result<ExecOutput, ExecError> {
        // Use shell to support pipes, redirections, etc.
        // kill_on_drop so a fired deadline reaps the child.
        let child = Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExecError::Spawn(e.to_string()))?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ExecError::Protocol(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        match output.status.code() {
            Some(0) => Ok(ExecOutput {
                status: 0,
                stdout,
                stderr,
            }),
            Some(status) => Err(ExecError::CommandFailed { status, stderr }),
            None => Err(ExecError::Protocol(
                "process terminated by signal".to_string(),
            )),
        }
    }
}

#[async_trait]
impl RemoteExecutor for LocalExecutor {
    #[instrument(skip(self, cmd), level = "debug")]
    async fn execute(&self, cmd: &str, deadline: Duration) -> Result<ExecOutput, ExecError> {
        debug!(command = %cmd, timeout = ?deadline, "executing local command");

        match timeout(deadline, Self::execute_inner(cmd)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(command = %cmd, timeout = ?deadline, "command timed out");
                Err(ExecError::Timeout { timeout: deadline })
            }
        }
    }
}
