//! Centralized client configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables (`STORAGE__PATH`, `AUTH__PERMISSIVE_LOGIN`, ...).

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Client configuration composed from per-concern sections.
#[derive(Debug, Default, Deserialize)]
pub struct ClientConfig {
    /// Durable storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Durable storage configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON state file. When unset, state is in-memory and
    /// lost at exit.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Accept any unknown `(email, password)` pair as a brand-new regular
    /// account. This reproduces the original demo behavior and is off by
    /// default; leave it off anywhere credentials are expected to mean
    /// something.
    #[serde(default)]
    pub permissive_login: bool,

    /// Privileged accounts. When empty, the built-in demo allowlist is
    /// used.
    #[serde(default)]
    pub admins: Vec<AdminAccount>,
}

/// One privileged account entry from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminAccount {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if present configuration fails to parse. All
    /// sections have defaults, so an empty environment is valid.
    pub fn from_env() -> handwave_core::Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::Load {
                reason: e.to_string(),
            })?;
        config.try_deserialize().map_err(|e| {
            ConfigError::Load {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
