//! Bluesky account and service configuration.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Bluesky configuration loaded from environment variables.
///
/// Environment variables are prefixed with `BSKY_`:
/// - `BSKY_HANDLE`: Account handle or DID used to create sessions
/// - `BSKY_APP_PASSWORD`: App password for the account
/// - `BSKY_SERVICE_URL`: PDS / entryway base URL (default: "https://bsky.social")
/// - `BSKY_TIMEOUT_SECS`: Outbound request timeout (default: 30)
///
/// The credentials are optional at startup. Requests made while they are
/// missing are rejected before any upstream call.
#[derive(Debug, Clone, Deserialize)]
pub struct BskyConfig {
    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub app_password: Option<SecretString>,

    #[serde(default = "default_service_url")]
    pub service_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_service_url() -> String {
    "https://bsky.social".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

const MIN_TIMEOUT_SECS: u64 = 1;

impl BskyConfig {
    /// Load configuration from environment variables prefixed with `BSKY_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("BSKY_").from_env::<BskyConfig>()
    }

    /// Build a configuration with explicit credentials against the default service.
    pub fn with_credentials(handle: impl Into<String>, app_password: impl Into<String>) -> Self {
        Self {
            handle: Some(handle.into()),
            app_password: Some(SecretString::new(app_password.into())),
            ..Self::default()
        }
    }

    /// Credentials to create a session with, if both are present and non-empty.
    pub fn credentials(&self) -> Option<Credentials> {
        let identifier = self
            .handle
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())?;
        let password = self
            .app_password
            .as_ref()
            .filter(|p| !p.expose_secret().is_empty())?;

        Some(Credentials {
            identifier: identifier.to_string(),
            password: password.clone(),
        })
    }

    /// Outbound request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}

impl Default for BskyConfig {
    fn default() -> Self {
        Self {
            handle: None,
            app_password: None,
            service_url: default_service_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Account identifier and app password exchanged for a session.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: SecretString,
}
