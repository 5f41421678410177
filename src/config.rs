//! Host configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//! Optional:
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: default 3000
//! - `KOKMAISA_API_BASE_URL`: REST API base handed to the browser, default `/api`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use kokmaisa_client::config::ApiConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors that stop the host from starting.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable holds an unusable value.
    #[error("invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    pub fn from_env() -> Result<Self, HostError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| HostError::InvalidVar { var: "HOST", value: raw.clone() })?,
        };
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| HostError::InvalidVar { var: "PORT", value: raw.clone() })?,
        };
        let api = ApiConfig::from_raw(lookup("KOKMAISA_API_BASE_URL").as_deref());
        Ok(Self { host, port, api })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
