//! Server configuration.
//!
//! The reference deployment serves `./web` on port 3000. Both can be
//! overridden through the environment at startup.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::frontend;

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_ENV: &str = "TOONMAKER_PORT";
pub const WEB_ROOT_ENV: &str = "TOONMAKER_WEB_ROOT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid TOONMAKER_PORT value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding the built client.
    pub root: PathBuf,
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(frontend::DEFAULT_WEB_DIR),
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let configured_root = lookup(WEB_ROOT_ENV).map(PathBuf::from);
        let root = frontend::find_web_root(configured_root)
            .unwrap_or_else(|| PathBuf::from(frontend::DEFAULT_WEB_DIR));

        Ok(Self {
            root,
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}
