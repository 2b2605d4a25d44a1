//! Server configuration, read from the environment once at startup.

use std::str::FromStr;

/// Largest grid dimension stepped by default.
pub const DEFAULT_MAX_GRID_SIZE: usize = 1024;

/// Configuration for the step server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Largest accepted grid dimension.
    pub max_grid_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            max_grid_size: DEFAULT_MAX_GRID_SIZE,
        }
    }
}

/// A configuration variable held a value that could not be used.
#[derive(Debug, thiserror::Error)]
#[error("invalid {name}={value:?}: {reason}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `LIFE_HOST` -- bind address (default `0.0.0.0`)
    /// - `LIFE_PORT` -- TCP port (default `8080`)
    /// - `LIFE_MAX_GRID_SIZE` -- largest accepted grid dimension (default `1024`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = lookup("LIFE_HOST").unwrap_or(defaults.host);
        let port = parse_or(&lookup, "LIFE_PORT", defaults.port)?;
        let max_grid_size = parse_or(&lookup, "LIFE_MAX_GRID_SIZE", defaults.max_grid_size)?;

        if max_grid_size == 0 {
            return Err(ConfigError {
                name: "LIFE_MAX_GRID_SIZE",
                value: String::from("0"),
                reason: String::from("must be at least 1"),
            });
        }

        Ok(Self { host, port, max_grid_size })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
