//! Runtime settings, read once from the environment at startup.
//!
//! | Env var                 | Default                 |
//! |-------------------------|-------------------------|
//! | `HOST`                  | `0.0.0.0`               |
//! | `PORT`                  | `3000`                  |
//! | `CORS_ORIGINS`          | `http://localhost:5173` |
//! | `REQUEST_TIMEOUT_SECS`  | `30`                    |
//! | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
//!
//! `DATABASE_URL` is read separately by the binary.

use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings consumed by the router (`cors_origins`, `request_timeout`) and
/// by the binary (`addr`, `shutdown_timeout`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Already validated as header values, so building the CORS layer
    /// cannot fail.
    pub cors_origins: Vec<HeaderValue>,
    pub request_timeout: Duration,
    /// Upper bound on closing the database pool after the server stops.
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let setting = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = parse("HOST", &setting("HOST", "0.0.0.0"))?;
        let port: u16 = parse("PORT", &setting("PORT", "3000"))?;

        let cors_origins = setting("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| parse("CORS_ORIGINS", origin))
            .collect::<Result<Vec<HeaderValue>, _>>()?;

        let request_timeout: u64 = parse(
            "REQUEST_TIMEOUT_SECS",
            &setting("REQUEST_TIMEOUT_SECS", "30"),
        )?;
        let shutdown_timeout: u64 = parse(
            "SHUTDOWN_TIMEOUT_SECS",
            &setting("SHUTDOWN_TIMEOUT_SECS", "30"),
        )?;

        Ok(Self {
            addr: SocketAddr::new(host, port),
            cors_origins,
            request_timeout: Duration::from_secs(request_timeout),
            shutdown_timeout: Duration::from_secs(shutdown_timeout),
        })
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: err.to_string(),
    })
}
