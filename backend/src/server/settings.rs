//! Server configuration loaded via OrthoConfig.
//!
//! Settings come from the environment under the `REPAIR_` prefix, with
//! CLI flags and config files layered on top by [`ortho_config`].

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_ALLOWED_ORIGIN: &str = "https://repair.go-pro-world.net";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

/// Configuration values controlling how the HTTP server is exposed.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REPAIR")]
pub struct ServerSettings {
    /// Socket address the server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Browser origin allowed to make credentialed cross-origin requests.
    pub allowed_origin: Option<String>,
    /// Mark the session cookie `Secure` so browsers only send it over TLS.
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// Path to the file holding the session key material.
    pub session_key_file: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to port 8000 on all
    /// interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// Return the configured allowed origin, falling back to the production
    /// frontend.
    pub fn allowed_origin(&self) -> &str {
        self.allowed_origin.as_deref().unwrap_or(DEFAULT_ALLOWED_ORIGIN)
    }

    /// Return the configured session key path, falling back to the mounted
    /// secret location.
    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_SESSION_KEY_FILE))
    }
}
