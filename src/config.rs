//! Server configuration loaded from the environment.

use camino::Utf8PathBuf;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default directory for uploaded attachments.
pub const DEFAULT_BLOB_ROOT: &str = "./uploads";
/// Default public base URL of uploaded attachments.
pub const DEFAULT_BLOB_PUBLIC_URL: &str = "http://localhost:3000/files";
/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "workboard=info,tower_http=info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable holds a value that cannot be parsed.
    #[error("{name} has invalid value '{value}'")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Configuration of the `workboard-server` binary.
///
/// | Env Var           | Default                          |
/// |-------------------|----------------------------------|
/// | `DATABASE_URL`    | required                         |
/// | `HOST`            | `0.0.0.0`                        |
/// | `PORT`            | `3000`                           |
/// | `BLOB_ROOT`       | `./uploads`                      |
/// | `BLOB_PUBLIC_URL` | `http://localhost:3000/files`    |
/// | `LOG_FILTER`      | `workboard=info,tower_http=info` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
    /// Directory attachments are written into.
    pub blob_root: Utf8PathBuf,
    /// Public base URL of stored attachments.
    pub blob_public_url: String,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a value
    /// cannot be parsed.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = parse_var(lookup, "HOST", DEFAULT_HOST)?;
        let port = parse_var(lookup, "PORT", &DEFAULT_PORT.to_string())?;
        let blob_root =
            Utf8PathBuf::from(lookup("BLOB_ROOT").unwrap_or_else(|| DEFAULT_BLOB_ROOT.to_owned()));
        let blob_public_url = lookup("BLOB_PUBLIC_URL")
            .unwrap_or_else(|| DEFAULT_BLOB_PUBLIC_URL.to_owned());
        let log_filter =
            lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            database_url,
            host,
            port,
            blob_root,
            blob_public_url,
            log_filter,
        })
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let raw = lookup(name).unwrap_or_else(|| default.to_owned());
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value: raw })
}
