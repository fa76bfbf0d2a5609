//! SSH private key loading

use std::path::Path;

use russh::keys::{PrivateKey, load_secret_key};
use tracing::debug;

use crate::error::ExecError;

/// Load a private key from disk.
///
/// Called once at process startup; an unreadable or world-accessible key
/// file is fatal there, never a per-request condition.
///
/// # Errors
/// Returns `ExecError::Key` if the file is missing, has permissions wider
/// than 600, or cannot be parsed as a private key.
pub fn load_private_key(path: &Path) -> Result<PrivateKey, ExecError> {
    validate_key_permissions(path)?;

    let key = load_secret_key(path, None).map_err(|e| ExecError::Key(e.to_string()))?;

    debug!(path = %path.display(), "loaded SSH private key");

    Ok(key)
}

fn validate_key_permissions(path: &Path) -> Result<(), ExecError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)
        .map_err(|e| ExecError::Key(format!("{}: {e}", path.display())))?;

    // mode & 0o77 checks group and other permissions
    let mode = metadata.permissions().mode();
    if mode & 0o77 != 0 {
        return Err(ExecError::Key(format!(
            "key file permissions too open: {} (should be 600)",
            path.display()
        )));
    }

    Ok(())
}
