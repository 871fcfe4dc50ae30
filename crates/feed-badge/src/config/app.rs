//! Server configuration for the feed badge server.

use serde::Deserialize;

/// Server configuration loaded from environment variables.
///
/// Environment variables are prefixed with `BADGE_`:
/// - `BADGE_HOST`: Server bind address (default: "0.0.0.0")
/// - `BADGE_PORT`: Server port (default: 3000)
/// - `BADGE_LOG_JSON`: Emit JSON formatted logs (default: false)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Emit JSON formatted logs
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl AppConfig {
    /// Load configuration from environment variables prefixed with `BADGE_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("BADGE_").from_env::<AppConfig>()
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_json: false,
        }
    }
}
