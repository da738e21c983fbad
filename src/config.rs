//! Database configuration, read from the process environment at startup
//! and passed explicitly into the gateway.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

const DEFAULT_PORT: u16 = 5432;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid port in DB_SERVER: {0}")]
    InvalidPort(String),
}

/// Connection settings for the trails database. Values never change after
/// process start; nothing reads the environment past `from_env`.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl DbConfig {
    /// Read DB_SERVER, DB_NAME, DB_USERNAME, DB_PASSWORD. All four are
    /// required. DB_SERVER accepts `host` or `host:port` where host is a
    /// hostname or IPv4 address; a bare IPv6 address is taken whole as
    /// the host.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server = require("DB_SERVER")?;
        let (host, port) = parse_server(&server)?;
        Ok(DbConfig {
            host,
            port,
            database: require("DB_NAME")?,
            username: require("DB_USERNAME")?,
            password: require("DB_PASSWORD")?,
        })
    }

    /// Connect options for one connection. TLS is off: the upstream
    /// database offers no transport security.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(PgSslMode::Disable)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn parse_server(server: &str) -> Result<(String, u16), ConfigError> {
    match server.split_once(':') {
        Some((host, port)) if !port.contains(':') => {
            let port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
            Ok((host.to_string(), port))
        }
        // More than one colon: a bare IPv6 address, used whole as the host.
        Some(_) => Ok((server.to_string(), DEFAULT_PORT)),
        None => Ok((server.to_string(), DEFAULT_PORT)),
    }
}
