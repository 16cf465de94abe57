//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `RECORDS_*` environment variables, or a
//! configuration file (`--config-path`, `RECORDS_CONFIG_PATH`, or a
//! `.records.toml` dotfile). Port and record id carry derive defaults; the
//! remaining fields are optional.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Settings controlling the listener, the served record, and user seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECORDS")]
pub struct AppSettings {
    /// Address to bind.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Identifier served by `GET /id`.
    #[ortho_config(default = 0)]
    pub record_id: i64,
    /// Name served by `GET /name`.
    pub record_name: Option<String>,
    /// JSON users file seeding the lookup adapter.
    pub users_file: Option<PathBuf>,
}

impl AppSettings {
    /// Socket address to bind, falling back to the unspecified IPv4 host.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Identifier to serve.
    pub fn record_id(&self) -> i64 {
        self.record_id
    }

    /// Name to serve, falling back to the empty string.
    pub fn record_name(&self) -> &str {
        self.record_name.as_deref().unwrap_or_default()
    }

    /// Users file path, if one was configured.
    pub fn users_file(&self) -> Option<&Path> {
        self.users_file.as_deref()
    }
}
