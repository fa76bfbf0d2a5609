//! Error types for hostpulse-exec

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during remote execution
#[derive(Error, Debug, Clone)]
pub enum ExecError {
    /// Failed to connect to remote host
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Transport protocol error
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Process spawn error (local execution)
    #[error("failed to spawn process: {0}")]
    Spawn(String),

    /// Command exited with a non-zero status
    #[error("command exited with status {status}: {stderr}")]
    CommandFailed {
        /// Exit status code
        status: i32,
        /// Trimmed stderr output
        stderr: String,
    },

    /// Overall deadline elapsed before the command resolved
    #[error("command timed out after {timeout:?}")]
    Timeout {
        /// Timeout duration that was exceeded
        timeout: Duration,
    },

    /// SSH key error
    #[error("SSH key error: {0}")]
    Key(String),
}

impl ExecError {
    /// True for failures raised by the transport layer itself, as opposed to
    /// the remote command's exit status or the call deadline.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ExecError::ConnectionFailed(_)
                | ExecError::AuthenticationFailed(_)
                | ExecError::Protocol(_)
                | ExecError::Spawn(_)
                | ExecError::Key(_)
        )
    }
}
