//! Remote executor trait

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ExecError;
use crate::result::ExecOutput;

/// A single-attempt command execution seam.
///
/// One call is one invocation: no retries, no session reuse. The `timeout`
/// bounds the whole sequence (connect, exec, stream collection, status
/// retrieval) and the implementation must release whatever transport it
/// opened before returning, on every path.
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    async fn execute(&self, cmd: &str, timeout: Duration) -> Result<ExecOutput, ExecError>;
}
