//! Error types for hostpulse-probe

use thiserror::Error;

use hostpulse_exec::ExecError;

/// Errors that can occur during metrics collection
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A probe invocation failed (transport, remote status, or timeout)
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// A probe ran but its output did not parse
    #[error("unparseable probe output: {0}")]
    Parse(String),
}
