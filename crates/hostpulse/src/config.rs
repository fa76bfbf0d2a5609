//! Configuration loading and types

use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::eyre;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the hostpulse daemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Daemon server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// The monitored host
    pub target: TargetConfig,
}

/// Daemon server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address and port to bind to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

/// Connection settings for the monitored host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// IP address or hostname for SSH connection
    pub host: String,
    /// SSH port
    #[serde(default = "default_port")]
    pub port: u16,
    /// SSH user
    pub user: String,
    /// Path to the SSH private key
    pub key_path: PathBuf,
    /// Connect-readiness deadline in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Per-command deadline in milliseconds
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
}

impl TargetConfig {
    /// Connect-readiness deadline
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Per-command deadline
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    22
}

fn default_connect_timeout_ms() -> u64 {
    6000
}

fn default_command_timeout_ms() -> u64 {
    8000
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from the environment variable or well-known paths.
    ///
    /// # Errors
    /// Returns an error if no config file exists anywhere; the target
    /// section has required fields, so there is no default to fall back to.
    pub fn load_default() -> eyre::Result<Self> {
        if let Ok(path) = std::env::var("HOSTPULSE_CONFIG") {
            return Self::load(&PathBuf::from(path));
        }

        let paths = [
            PathBuf::from("hostpulse.toml"),
            PathBuf::from("/etc/hostpulse/hostpulse.toml"),
            dirs::config_dir()
                .map(|p| p.join("hostpulse/hostpulse.toml"))
                .unwrap_or_default(),
        ];

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        Err(eyre!(
            "no configuration file found (set HOSTPULSE_CONFIG or create hostpulse.toml)"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [target]
            host = "10.0.0.5"
            user = "monitor"
            key_path = "/etc/hostpulse/id_ed25519"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.target.port, 22);
        assert_eq!(config.target.connect_timeout(), Duration::from_millis(6000));
        assert_eq!(config.target.command_timeout(), Duration::from_millis(8000));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [target]
            host = "10.0.0.5"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0:9000"
            log_level = "debug"

            [target]
            host = "10.0.0.5"
            port = 2222
            user = "monitor"
            key_path = "/etc/hostpulse/id_ed25519"
            command_timeout_ms = 15000
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.target.port, 2222);
        assert_eq!(config.target.command_timeout(), Duration::from_millis(15000));
    }
}
