//! hostpulse-exec: Remote command execution primitive
//!
//! One invocation = one authenticated transport session. Every call opens a
//! fresh session, runs a single command, and closes the session exactly once
//! before the outcome is returned, whether the command succeeded, failed
//! remotely, hit a transport error, or ran past its deadline.

pub mod error;
pub mod keys;
pub mod local;
pub mod result;
pub mod ssh;
pub mod target;
pub mod traits;

pub use error::ExecError;
pub use local::LocalExecutor;
pub use result::ExecOutput;
pub use ssh::SshExecutor;
pub use target::Target;
pub use traits::RemoteExecutor;
