//! Environment-driven server configuration.
//!
//! | Variable              | Default   |
//! |-----------------------|-----------|
//! | `HOST`                | `0.0.0.0` |
//! | `PORT`                | `3000`    |
//! | `STATIC_DIR`          | `static`  |
//! | `PRICING_CATALOG`     | built-in  |
//! | `PAGE_CACHE_TTL_SECS` | `600`     |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    /// JSON catalog replacing the built-in tiers and activities
    pub catalog_path: Option<PathBuf>,
    pub page_cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            static_dir: PathBuf::from("static"),
            catalog_path: None,
            page_cache_ttl: Duration::from_secs(600),
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: parse_var("HOST", var("HOST"))?.unwrap_or(defaults.host),
            port: parse_var("PORT", var("PORT"))?.unwrap_or(defaults.port),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            catalog_path: var("PRICING_CATALOG").map(PathBuf::from),
            page_cache_ttl: parse_var::<u64>("PAGE_CACHE_TTL_SECS", var("PAGE_CACHE_TTL_SECS"))?
                .map(Duration::from_secs)
                .unwrap_or(defaults.page_cache_ttl),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value })
    })
    .transpose()
}
