//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built browser bundle (`index.html` at its root).
    pub static_dir: PathBuf,
    /// Backend base URL for `/api/*`, without a trailing slash.
    pub api_upstream: Option<String>,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 5000
    /// - `STATIC_DIR`: default `dist`
    /// - `API_UPSTREAM_URL`: no default; `/api/*` answers 503 without it
    /// - `PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match env_non_empty("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "HOST", value: raw })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match env_non_empty("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let static_dir = PathBuf::from(env_non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_owned()));
        let api_upstream = env_non_empty("API_UPSTREAM_URL").map(|url| url.trim_end_matches('/').to_owned());
        let proxy_timeout = match env_non_empty("PROXY_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", value: raw })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        };

        Ok(Self { host, port, static_dir, api_upstream, proxy_timeout })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_html(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
