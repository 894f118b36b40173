pub mod brief;
pub mod composer;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod serializers;
pub mod telemetry;
pub mod text;
pub mod urls;
pub mod views;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::{extract::DefaultBodyLimit, Router};

use crate::telemetry::LogFormat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerCfg {
    /// Bind address (default 0.0.0.0). Override with HOST.
    pub host: IpAddr,
    /// Listen port (default 3000). Override with PORT.
    pub port: u16,
    /// Max request body in bytes (default 64 KiB). Override with BODY_LIMIT_BYTES.
    pub body_limit_bytes: usize,
    /// LOG_FORMAT=json for JSON lines, anything else for compact text.
    pub log_format: LogFormat,
}

impl Default for ServerCfg {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            body_limit_bytes: 64 * 1024,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerCfg {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServerCfg::from_env`] but reads variables through `lookup`.
    /// Missing or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("HOST")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);
        let body_limit_bytes = lookup("BODY_LIMIT_BYTES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.body_limit_bytes);
        let log_format = lookup("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(defaults.log_format);

        Self { host, port, body_limit_bytes, log_format }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Full application router with request limits applied.
pub fn app(cfg: &ServerCfg) -> Router {
    urls::router().layer(DefaultBodyLimit::max(cfg.body_limit_bytes))
}
