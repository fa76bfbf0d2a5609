//! Immutable connection descriptor for the monitored host

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use russh::keys::PrivateKey;

use crate::error::ExecError;
use crate::keys::load_private_key;

/// Connection descriptor: host, port, user, key material, connect deadline.
///
/// Built once at process startup and shared read-only by every invocation.
/// The private key is read from disk exactly once, here; invocations never
/// touch the filesystem.
#[derive(Clone)]
pub struct Target {
    /// Host address
    pub host: String,
    /// SSH port
    pub port: u16,
    /// SSH user
    pub user: String,
    /// Deadline for connect + authentication readiness
    pub connect_timeout: Duration,
    key: Arc<PrivateKey>,
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}

impl Target {
    /// Build a target, loading the private key from `key_path`.
    ///
    /// # Errors
    /// Returns `ExecError::Key` if the key cannot be read or parsed.
    pub fn load(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        key_path: &Path,
        connect_timeout: Duration,
    ) -> Result<Self, ExecError> {
        let key = load_private_key(key_path)?;

        Ok(Self {
            host: host.into(),
            port,
            user: user.into(),
            connect_timeout,
            key: Arc::new(key),
        })
    }

    /// Key material handle for authentication
    pub(crate) fn key(&self) -> Arc<PrivateKey> {
        Arc::clone(&self.key)
    }
}
