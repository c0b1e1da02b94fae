use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    /// Read `BLOG_HOST` and `BLOG_PORT`, falling back to loopback:8000.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("BLOG_HOST").ok(),
            std::env::var("BLOG_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let ip = match host {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::Address { value, source })?,
            None => DEFAULT_HOST,
        };

        let port = match port {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::Port { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            addr: SocketAddr::new(ip, port),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}
