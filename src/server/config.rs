use std::net::{Ipv4Addr, SocketAddr};

use crate::server::error::{config::ConfigError, AppError};

/// Port used when `APP_ENV` is anything other than `test`.
pub const DEFAULT_PORT: u16 = 3000;

/// Port used when `APP_ENV=test`, so a test server can run beside a dev server.
pub const TEST_PORT: u16 = 3001;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = resolve_port(
            std::env::var("APP_ENV").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )?;

        Ok(Self { database_url, port })
    }

    /// The server only ever listens on localhost.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

/// Picks the listening port from `APP_ENV` and an optional explicit `PORT`.
///
/// An explicit port always wins; otherwise `APP_ENV=test` selects [`TEST_PORT`] and
/// anything else [`DEFAULT_PORT`].
fn resolve_port(app_env: Option<&str>, port: Option<&str>) -> Result<u16, ConfigError> {
    if let Some(port) = port {
        return port.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value: port.to_string(),
        });
    }

    match app_env {
        Some("test") => Ok(TEST_PORT),
        _ => Ok(DEFAULT_PORT),
    }
}
