//! Result type for command execution

use serde::{Deserialize, Serialize};

/// Output of a successfully completed remote command
///
/// Produced only when the remote exit status is 0; any other status
/// surfaces as [`crate::ExecError::CommandFailed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecOutput {
    /// Exit status code (always 0)
    pub status: i32,
    /// Trimmed stdout output
    pub stdout: String,
    /// Trimmed stderr output
    pub stderr: String,
}
