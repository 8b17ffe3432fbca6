//! HTTP server configuration loaded via OrthoConfig.
//!
//! Values layer CLI arguments over `LARDER_*` environment variables over
//! defaults.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LARDER")]
pub struct ServerSettings {
    /// Interface the server binds to.
    pub host: Option<String>,
    /// TCP port the server listens on.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Return the configured bind host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}
